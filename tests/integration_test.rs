//! 集成測試

use chrono::NaiveDate;
use proptest::prelude::*;
use replenish::calc::{
    classify_stock_status, compute_buffer_stock, compute_reorder_point, compute_safety_stock,
    compute_suggested_order, days_until_stockout,
};
use replenish::*;
use rstest::rstest;
use rust_decimal::Decimal;
use std::collections::HashMap;

fn dec(value: i64) -> Decimal {
    Decimal::from(value)
}

#[test]
fn test_scenario_safety_stock() {
    assert_eq!(compute_safety_stock(dec(5), dec(3), dec(5)), dec(10));
}

#[test]
fn test_scenario_buffer_stock() {
    assert_eq!(compute_buffer_stock(dec(20), dec(150)), dec(30));
}

#[test]
fn test_scenario_reorder_point() {
    assert_eq!(compute_reorder_point(dec(5), dec(3), dec(10)), dec(25));
}

#[rstest]
#[case(40, 15)]
#[case(100, 0)]
fn test_scenario_suggested_order(#[case] current_stock: i64, #[case] expected: i64) {
    assert_eq!(
        compute_suggested_order(dec(25), dec(30), dec(current_stock)),
        dec(expected)
    );
}

#[test]
fn test_scenario_critical_status() {
    assert_eq!(
        classify_stock_status(dec(8), dec(10), dec(25)),
        StockStatus::Critical
    );
}

#[test]
fn test_full_pharmacy_plan() {
    replenish::logging::init_test();

    // 場景：小型藥局的四項商品
    //   AMOX-500  抗生素，庫存偏低
    //   PARA-500  止痛藥，接近再訂購點
    //   VITC-1000 維他命，庫存充足
    //   MASK-N95  無消耗統計
    let config = PlannerConfig::from_json_str(
        r#"{
            "defaults": { "lead_time_avg_days": 3, "lead_time_max_days": 5, "risk_percentage": 20 },
            "overrides": {
                "AMOX-500": { "lead_time_avg_days": 2, "lead_time_max_days": 4, "risk_percentage": 25 }
            }
        }"#,
    )
    .unwrap();

    let mut consumption = HashMap::new();
    consumption.insert(
        "AMOX-500".to_string(),
        ConsumptionStats::new(dec(6), dec(180)),
    );
    consumption.insert("PARA-500".to_string(), ConsumptionStats::from_daily(dec(10)));
    consumption.insert(
        "VITC-1000".to_string(),
        ConsumptionStats::new(Decimal::new(15, 1), dec(45)),
    );

    let planner = ReplenishmentPlanner::new(config).with_consumption(consumption);

    let stocks = vec![
        StockLevel::new("AMOX-500", dec(10)),
        StockLevel::new("PARA-500", dec(45)),
        StockLevel::new("VITC-1000", dec(300)),
        StockLevel::new("MASK-N95", dec(12)),
    ];
    let as_of = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();

    let report = planner.plan(&stocks, as_of);

    assert_eq!(report.lines.len(), 4);

    // AMOX-500：安全 = 2×6 = 12；再訂購點 = 12+12 = 24；緩衝 = 25%×180 = 45
    let amox = report.line("AMOX-500").unwrap();
    assert_eq!(amox.result.safety_stock, dec(12));
    assert_eq!(amox.result.reorder_point, dec(24));
    assert_eq!(amox.result.buffer_stock, dec(45));
    assert_eq!(amox.result.suggested_order, dec(59));
    assert_eq!(amox.result.status, StockStatus::Critical);
    assert_eq!(amox.coverage, StockCoverage::Days(1));

    // PARA-500：安全 = 20；再訂購點 = 50；緩衝 = 60
    let para = report.line("PARA-500").unwrap();
    assert_eq!(para.result.reorder_point, dec(50));
    assert_eq!(para.result.buffer_stock, dec(60));
    assert_eq!(para.result.suggested_order, dec(65));
    assert_eq!(para.result.status, StockStatus::NeedsReorder);

    // VITC-1000：安全 = 3；再訂購點 = ceil(4.5+3) = 8；緩衝 = 9
    let vitc = report.line("VITC-1000").unwrap();
    assert_eq!(vitc.result.reorder_point, dec(8));
    assert_eq!(vitc.result.suggested_order, Decimal::ZERO);
    assert_eq!(vitc.result.status, StockStatus::Healthy);
    assert_eq!(vitc.coverage, StockCoverage::Days(200));

    // MASK-N95：使用預設消耗 日均 5 / 月均 150
    let mask = report.line("MASK-N95").unwrap();
    assert_eq!(mask.consumption, ConsumptionStats::fallback());
    assert_eq!(mask.result.status, StockStatus::Critical);
    assert_eq!(mask.result.suggested_order, dec(43));

    // 建議排序：危急在前，同狀態依可支撐天數
    let order: Vec<_> = report
        .suggestions
        .iter()
        .map(|s| s.product_id.as_str())
        .collect();
    assert_eq!(order, vec!["AMOX-500", "MASK-N95", "PARA-500"]);

    let amox_suggestion = &report.suggestions[0];
    assert_eq!(amox_suggestion.order_date, as_of);
    assert_eq!(
        amox_suggestion.expected_receipt_date,
        NaiveDate::from_ymd_opt(2026, 3, 12).unwrap()
    );

    assert_eq!(
        report.status_counts(),
        StatusCounts {
            critical: 2,
            needs_reorder: 1,
            healthy: 1
        }
    );
    assert!(report
        .warnings
        .iter()
        .any(|w| w.concerns("MASK-N95") && w.severity() == WarningSeverity::Info));
    assert!(!report.has_errors());
}

#[test]
fn test_report_serializes_to_json() {
    let mut planner = ReplenishmentPlanner::new(PlannerConfig::default());
    planner.set_consumption("PARA-500", ConsumptionStats::fallback());

    let report = planner.plan(
        &[StockLevel::new("PARA-500", dec(20))],
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
    );

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["lines"][0]["product_id"], "PARA-500");
    assert_eq!(json["lines"][0]["result"]["status"], "NeedsReorder");
    assert_eq!(json["suggestions"].as_array().unwrap().len(), 1);
}

#[test]
fn test_overflow_and_huge_coverage_stay_inside_the_report() {
    let mut planner = ReplenishmentPlanner::new(PlannerConfig::default());
    planner.set_consumption("BULK-001", ConsumptionStats::new(Decimal::MAX, Decimal::MAX));
    planner.set_consumption("SLOW-MOVER", ConsumptionStats::new(Decimal::new(1, 28), Decimal::ONE));
    planner.set_consumption("PARA-500", ConsumptionStats::fallback());

    let report = planner.plan(
        &[
            StockLevel::new("BULK-001", dec(1)),
            StockLevel::new("SLOW-MOVER", dec(1)),
            StockLevel::new("PARA-500", dec(20)),
        ],
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
    );

    assert_eq!(report.lines.len(), 2);
    assert!(report.has_errors());
    assert!(report
        .warnings_for("BULK-001")
        .any(|w| w.severity() == WarningSeverity::Error));
    assert_eq!(report.warnings_for("SLOW-MOVER").count(), 0);
}

#[test]
fn test_anonymous_negative_stock_error() {
    let err = ReplenishmentCalculator::compute_all(
        dec(-1),
        &ConsumptionStats::fallback(),
        &ReplenishmentParameters::default(),
    )
    .unwrap_err();

    assert!(matches!(err, ReplenishError::NegativeQuantity(_)));
}

#[test]
fn test_coverage_text() {
    assert_eq!(days_until_stockout(dec(40), dec(5)).to_string(), "8");
    assert_eq!(days_until_stockout(dec(40), Decimal::ZERO).to_string(), "∞");
}

fn inputs() -> impl Strategy<Value = (Decimal, ConsumptionStats, ReplenishmentParameters)> {
    (
        0i64..2_000,
        0i64..5_000,
        0i64..20_000,
        1i64..100,
        0i64..100,
        0i64..=100,
    )
        .prop_map(|(stock, daily_tenths, monthly_tenths, avg, extra, risk)| {
            let consumption =
                ConsumptionStats::new(Decimal::new(daily_tenths, 1), Decimal::new(monthly_tenths, 1));
            let params = ReplenishmentParameters::new(dec(avg), dec(avg + extra))
                .with_risk_percentage(dec(risk));
            (dec(stock), consumption, params)
        })
}

proptest! {
    #[test]
    fn prop_compute_all_deterministic((stock, consumption, params) in inputs()) {
        let first = ReplenishmentCalculator::compute_all(stock, &consumption, &params).unwrap();
        let second = ReplenishmentCalculator::compute_all(stock, &consumption, &params).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_compute_all_outputs_non_negative((stock, consumption, params) in inputs()) {
        let result = ReplenishmentCalculator::compute_all(stock, &consumption, &params).unwrap();
        prop_assert!(result.safety_stock >= Decimal::ZERO);
        prop_assert!(result.buffer_stock >= Decimal::ZERO);
        prop_assert!(result.reorder_point >= Decimal::ZERO);
        prop_assert!(result.suggested_order >= Decimal::ZERO);
        prop_assert!(result.safety_stock <= result.reorder_point);
    }

    #[test]
    fn prop_more_stock_never_orders_more(
        (stock, consumption, params) in inputs(),
        increase in 0i64..1_000,
    ) {
        let before = ReplenishmentCalculator::compute_all(stock, &consumption, &params).unwrap();
        let after =
            ReplenishmentCalculator::compute_all(stock + dec(increase), &consumption, &params).unwrap();
        prop_assert!(after.suggested_order <= before.suggested_order);
    }
}
