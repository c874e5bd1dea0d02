//! 藥局補貨規劃示例
//!
//! 執行：RUST_LOG=debug cargo run --example pharmacy_replenishment

use anyhow::Context;
use chrono::NaiveDate;
use replenish::{
    ConsumptionStats, PlannerConfig, ReplenishmentCalculator, ReplenishmentParameters,
    ReplenishmentPlanner, StockLevel,
};
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    replenish::logging::init();

    println!("=== 藥局補貨規劃示例 ===\n");

    // 單一產品計算
    let params = ReplenishmentParameters::default();
    let result = ReplenishmentCalculator::compute_all(
        Decimal::from(40),
        &ConsumptionStats::fallback(),
        &params,
    )?;
    println!("單一產品（現有 40，預設參數）:");
    println!(
        "  安全庫存 {}，緩衝庫存 {}，再訂購點 {}，建議訂購 {}，狀態 {} ({})\n",
        result.safety_stock,
        result.buffer_stock,
        result.reorder_point,
        result.suggested_order,
        result.status,
        result.status.badge_color()
    );

    // 批次規劃
    let config = PlannerConfig::from_json_str(
        r#"{
            "defaults": { "risk_percentage": 20 },
            "overrides": {
                "INSULIN-10ML": { "lead_time_avg_days": 1, "lead_time_max_days": 2 }
            }
        }"#,
    )
    .context("載入規劃配置失敗")?;

    let mut planner = ReplenishmentPlanner::new(config);
    planner.set_consumption("AMOX-500", ConsumptionStats::new(Decimal::from(6), Decimal::from(180)));
    planner.set_consumption("PARA-500", ConsumptionStats::from_daily(Decimal::from(10)));
    planner.set_consumption("INSULIN-10ML", ConsumptionStats::from_daily(Decimal::from(2)));

    let stocks = vec![
        StockLevel::new("AMOX-500", Decimal::from(10)),
        StockLevel::new("PARA-500", Decimal::from(45)),
        StockLevel::new("INSULIN-10ML", Decimal::from(30)),
        StockLevel::new("MASK-N95", Decimal::from(12)),
    ];

    let as_of = NaiveDate::from_ymd_opt(2026, 3, 10).context("無效的基準日")?;
    let report = planner.plan(&stocks, as_of);

    println!("產品狀態:");
    for line in &report.lines {
        println!(
            "  - {:<14} 現有 {:>5}  再訂購點 {:>5}  可支撐 {:>4} 天  [{}]",
            line.product_id,
            line.current_stock,
            line.result.reorder_point,
            line.coverage,
            line.result.status
        );
    }

    println!("\n採購建議:");
    for suggestion in &report.suggestions {
        println!(
            "  - {:<14} 數量 {:>5}  預計到貨 {}",
            suggestion.product_id, suggestion.quantity, suggestion.expected_receipt_date
        );
    }

    if !report.warnings.is_empty() {
        println!("\n警告:");
        for warning in &report.warnings {
            println!(
                "  - [{:?}] {}: {}",
                warning.severity(),
                warning.product_id.as_deref().unwrap_or("整批"),
                warning.message
            );
        }
    }

    let counts = report.status_counts();
    println!(
        "\n危急 {}，需補貨 {}，正常 {}，建議採購總量 {}",
        counts.critical,
        counts.needs_reorder,
        counts.healthy,
        report.total_suggested_quantity()
    );

    Ok(())
}
