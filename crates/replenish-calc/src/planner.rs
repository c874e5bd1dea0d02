//! 批次補貨規劃

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use rayon::prelude::*;
use replenish_core::{
    ConsumptionStats, PlannerConfig, PurchaseSuggestion, ReplenishmentParameters, StockLevel,
};

use crate::calculator::ReplenishmentCalculator;
use crate::coverage::days_until_stockout;
use crate::{ReplenishmentLine, ReplenishmentReport, ReplenishmentWarning, WarningKind};

/// 單一產品的規劃輸出
struct ProductOutcome {
    line: Option<ReplenishmentLine>,
    suggestion: Option<PurchaseSuggestion>,
    warnings: Vec<ReplenishmentWarning>,
}

/// 批次補貨規劃器
///
/// 對每個產品獨立計算；單一產品輸入有誤或計算溢出只記錄警告，不中斷整批規劃。
pub struct ReplenishmentPlanner {
    /// 參數配置（預設 + 個別覆寫）
    config: PlannerConfig,

    /// 消耗統計（產品ID -> 統計）
    consumption: HashMap<String, ConsumptionStats>,
}

impl ReplenishmentPlanner {
    /// 創建新的規劃器
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            consumption: HashMap::new(),
        }
    }

    /// 建構器模式：設置消耗統計
    pub fn with_consumption(mut self, consumption: HashMap<String, ConsumptionStats>) -> Self {
        self.consumption = consumption;
        self
    }

    /// 設置單一產品的消耗統計
    pub fn set_consumption(&mut self, product_id: impl Into<String>, stats: ConsumptionStats) {
        self.consumption.insert(product_id.into(), stats);
    }

    /// 取得產品適用的參數
    pub fn parameters_for(&self, product_id: &str) -> &ReplenishmentParameters {
        self.config.parameters_for(product_id)
    }

    /// 主規劃入口
    pub fn plan(&self, stocks: &[StockLevel], as_of: NaiveDate) -> ReplenishmentReport {
        tracing::info!("開始補貨規劃：產品 {} 筆，基準日 {}", stocks.len(), as_of);

        let start_time = std::time::Instant::now();

        // rayon 的 collect 保留輸入順序
        let outcomes: Vec<ProductOutcome> = stocks
            .par_iter()
            .map(|stock| self.plan_product(stock, as_of))
            .collect();

        let mut report = ReplenishmentReport::empty();
        for product_id in Self::duplicate_product_ids(stocks) {
            tracing::warn!("產品 {} 在輸入中重複出現", product_id);
            report.add_warning(ReplenishmentWarning::batch(
                WarningKind::DuplicateProduct,
                format!("產品 {} 在輸入中重複出現，每筆記錄各自計算", product_id),
            ));
        }
        for outcome in outcomes {
            report.lines.extend(outcome.line);
            report.suggestions.extend(outcome.suggestion);
            for warning in outcome.warnings {
                report.add_warning(warning);
            }
        }

        report.suggestions.sort_by(|a, b| {
            a.status
                .cmp(&b.status)
                .then(a.coverage.cmp(&b.coverage))
                .then_with(|| a.product_id.cmp(&b.product_id))
        });
        report.calculation_time_ms = Some(start_time.elapsed().as_millis());

        let counts = report.status_counts();
        tracing::info!(
            "補貨規劃完成，耗時 {:?}：危急 {}，需補貨 {}，正常 {}，採購建議 {} 筆",
            start_time.elapsed(),
            counts.critical,
            counts.needs_reorder,
            counts.healthy,
            report.suggestions.len()
        );

        report
    }

    /// 重複出現的產品ID（依首次重複的順序）
    fn duplicate_product_ids(stocks: &[StockLevel]) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for stock in stocks {
            let id = stock.product_id.as_str();
            if !seen.insert(id) && !duplicates.contains(&id) {
                duplicates.push(id);
            }
        }
        duplicates
    }

    /// 單一產品規劃
    fn plan_product(&self, stock: &StockLevel, as_of: NaiveDate) -> ProductOutcome {
        let product_id = &stock.product_id;
        let params = self.parameters_for(product_id);
        let mut warnings = Vec::new();

        let consumption = match self.consumption.get(product_id) {
            Some(stats) => *stats,
            None => {
                tracing::warn!("產品 {} 缺少消耗統計，使用預設值", product_id);
                warnings.push(ReplenishmentWarning::for_product(
                    product_id.as_str(),
                    WarningKind::FallbackConsumption,
                    "缺少消耗統計，使用預設值（日均 5，月均 150）".to_string(),
                ));
                ConsumptionStats::fallback()
            }
        };

        let result = match ReplenishmentCalculator::compute_for_stock(stock, &consumption, params) {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!("產品 {} 計算失敗: {}", product_id, err);
                warnings.push(ReplenishmentWarning::for_product(
                    product_id.as_str(),
                    WarningKind::Rejected,
                    err.to_string(),
                ));
                return ProductOutcome {
                    line: None,
                    suggestion: None,
                    warnings,
                };
            }
        };

        tracing::debug!(
            "產品 {}：現有 {}，再訂購點 {}，建議 {}，狀態 {:?}",
            product_id,
            stock.current_stock,
            result.reorder_point,
            result.suggested_order,
            result.status
        );

        let coverage = days_until_stockout(stock.current_stock, consumption.daily_average);

        let suggestion = if result.should_order() {
            match PurchaseSuggestion::new(
                product_id.clone(),
                result.suggested_order,
                result.status,
                coverage,
                as_of,
                params.lead_time_avg_days,
            ) {
                Ok(suggestion) => {
                    if suggestion.stocks_out_before_receipt() {
                        warnings.push(ReplenishmentWarning::for_product(
                            product_id.as_str(),
                            WarningKind::StockoutBeforeReceipt,
                            format!(
                                "庫存僅可支撐 {} 天，預計到貨日 {} 前將缺貨",
                                coverage, suggestion.expected_receipt_date
                            ),
                        ));
                    }
                    Some(suggestion)
                }
                Err(err) => {
                    warnings.push(ReplenishmentWarning::for_product(
                        product_id.as_str(),
                        WarningKind::Rejected,
                        err.to_string(),
                    ));
                    None
                }
            }
        } else {
            None
        };

        ProductOutcome {
            line: Some(ReplenishmentLine {
                product_id: product_id.clone(),
                current_stock: stock.current_stock,
                consumption,
                result,
                coverage,
            }),
            suggestion,
            warnings,
        }
    }
}
