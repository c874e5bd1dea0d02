//! 庫存覆蓋與月覆蓋訂購量

use replenish_core::StockCoverage;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 可支撐天數 = floor(現有庫存 / 日均消耗)，日均消耗不大於 0 時為無限
pub fn days_until_stockout(current_stock: Decimal, daily_average: Decimal) -> StockCoverage {
    if daily_average <= Decimal::ZERO {
        return StockCoverage::Unlimited;
    }
    if current_stock <= Decimal::ZERO {
        return StockCoverage::Days(0);
    }

    // 日均極小時除法溢出，視為最大天數
    let days = current_stock
        .checked_div(daily_average)
        .and_then(|ratio| ratio.floor().to_u64())
        .unwrap_or(u64::MAX);

    StockCoverage::Days(days)
}

/// 月覆蓋訂購量 = ceil(月均消耗 × 月數 + 最低庫存)
///
/// 與 [`crate::formulas::compute_suggested_order`] 不同，這個量不扣除現有庫存。
pub fn recommended_order_quantity(monthly_average: Decimal, min_stock: Decimal, months: u32) -> Decimal {
    (monthly_average * Decimal::from(months) + min_stock).ceil()
}

/// [`recommended_order_quantity`] 的溢出檢查版本
pub fn checked_recommended_order_quantity(
    monthly_average: Decimal,
    min_stock: Decimal,
    months: u32,
) -> Option<Decimal> {
    monthly_average
        .checked_mul(Decimal::from(months))?
        .checked_add(min_stock)
        .map(|v| v.ceil())
}
