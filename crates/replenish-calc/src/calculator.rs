//! 補貨主計算器

use replenish_core::{
    ConsumptionStats, OrderPolicy, ReplenishError, ReplenishmentParameters, ReplenishmentResult,
    StockLevel,
};
use rust_decimal::Decimal;

use crate::coverage::{checked_recommended_order_quantity, recommended_order_quantity};
use crate::formulas::{
    checked_buffer_stock, checked_reorder_point, checked_safety_stock, checked_suggested_order,
    classify_stock_status, compute_buffer_stock, compute_reorder_point, compute_safety_stock,
    compute_suggested_order,
};

/// 補貨計算器
///
/// 無狀態；每次呼叫只處理一個產品，相同輸入永遠得到相同結果。
pub struct ReplenishmentCalculator;

impl ReplenishmentCalculator {
    /// 驗證輸入後計算全部補貨指標
    ///
    /// 輸入不合法或計算溢出時回傳錯誤，不會 panic。
    ///
    /// # 範例
    /// ```
    /// # use replenish_calc::ReplenishmentCalculator;
    /// # use replenish_core::{ConsumptionStats, ReplenishmentParameters, StockStatus};
    /// # use rust_decimal::Decimal;
    /// let result = ReplenishmentCalculator::compute_all(
    ///     Decimal::from(40),
    ///     &ConsumptionStats::fallback(),
    ///     &ReplenishmentParameters::default(),
    /// )
    /// .unwrap();
    /// assert_eq!(result.suggested_order, Decimal::from(15));
    /// assert_eq!(result.status, StockStatus::Healthy);
    /// ```
    pub fn compute_all(
        current_stock: Decimal,
        consumption: &ConsumptionStats,
        params: &ReplenishmentParameters,
    ) -> replenish_core::Result<ReplenishmentResult> {
        if current_stock < Decimal::ZERO {
            return Err(ReplenishError::NegativeQuantity(current_stock));
        }
        consumption.validate()?;
        params.validate()?;

        Self::compute_checked(current_stock, Decimal::ZERO, consumption, params)
    }

    /// 以完整庫存記錄計算（月覆蓋策略需要最低庫存）
    pub fn compute_for_stock(
        stock: &StockLevel,
        consumption: &ConsumptionStats,
        params: &ReplenishmentParameters,
    ) -> replenish_core::Result<ReplenishmentResult> {
        stock.validate()?;
        consumption.validate()?;
        params.validate()?;

        Self::compute_checked(stock.current_stock, stock.min_stock, consumption, params)
    }

    /// 不驗證輸入的計算，不合理的輸入會得到數學上無意義的結果，溢出時 panic
    pub fn compute_all_unchecked(
        current_stock: Decimal,
        consumption: &ConsumptionStats,
        params: &ReplenishmentParameters,
    ) -> ReplenishmentResult {
        // 緩衝與安全庫存必須先於再訂購點，再訂購點先於建議訂購量
        let buffer_stock = compute_buffer_stock(params.risk_percentage, consumption.monthly_average);
        let safety_stock = compute_safety_stock(
            params.lead_time_max_days,
            params.lead_time_avg_days,
            consumption.daily_average,
        );
        let reorder_point = compute_reorder_point(
            consumption.daily_average,
            params.lead_time_avg_days,
            safety_stock,
        );

        let suggested_order = match params.order_policy {
            OrderPolicy::TargetLevel => {
                compute_suggested_order(reorder_point, buffer_stock, current_stock)
            }
            OrderPolicy::MonthlyCover { months } => {
                recommended_order_quantity(consumption.monthly_average, Decimal::ZERO, months)
            }
        };

        ReplenishmentResult {
            safety_stock,
            buffer_stock,
            reorder_point,
            suggested_order,
            status: classify_stock_status(current_stock, safety_stock, reorder_point),
        }
    }

    fn compute_checked(
        current_stock: Decimal,
        min_stock: Decimal,
        consumption: &ConsumptionStats,
        params: &ReplenishmentParameters,
    ) -> replenish_core::Result<ReplenishmentResult> {
        let overflow = |quantity: &str| ReplenishError::Overflow(quantity.to_string());

        let buffer_stock = checked_buffer_stock(params.risk_percentage, consumption.monthly_average)
            .ok_or_else(|| overflow("緩衝庫存"))?;
        let safety_stock = checked_safety_stock(
            params.lead_time_max_days,
            params.lead_time_avg_days,
            consumption.daily_average,
        )
        .ok_or_else(|| overflow("安全庫存"))?;
        let reorder_point = checked_reorder_point(
            consumption.daily_average,
            params.lead_time_avg_days,
            safety_stock,
        )
        .ok_or_else(|| overflow("再訂購點"))?;

        let suggested_order = match params.order_policy {
            OrderPolicy::TargetLevel => {
                checked_suggested_order(reorder_point, buffer_stock, current_stock)
            }
            OrderPolicy::MonthlyCover { months } => {
                checked_recommended_order_quantity(consumption.monthly_average, min_stock, months)
            }
        }
        .ok_or_else(|| overflow("建議訂購量"))?;

        Ok(ReplenishmentResult {
            safety_stock,
            buffer_stock,
            reorder_point,
            suggested_order,
            status: classify_stock_status(current_stock, safety_stock, reorder_point),
        })
    }
}
