//! 補貨公式
//!
//! 每個公式都是對十進位數的純函數，結果以向上取整表示整數件數。
//! 此處不做輸入驗證：違反前提（如最長提前期小於平均提前期）時結果可能為負，
//! 驗證由 [`crate::ReplenishmentCalculator::compute_all`] 負責。
//!
//! `compute_*` 在數值溢出時 panic；`checked_*` 版本在溢出時回傳 `None`。

use replenish_core::StockStatus;
use rust_decimal::Decimal;

/// 安全庫存 = ceil((最長提前期 - 平均提前期) × 日均消耗)
pub fn compute_safety_stock(
    lead_time_max_days: Decimal,
    lead_time_avg_days: Decimal,
    daily_average: Decimal,
) -> Decimal {
    ((lead_time_max_days - lead_time_avg_days) * daily_average).ceil()
}

/// 緩衝庫存 = ceil(風險百分比 / 100 × 月均消耗)
pub fn compute_buffer_stock(risk_percentage: Decimal, monthly_average: Decimal) -> Decimal {
    (risk_percentage / Decimal::ONE_HUNDRED * monthly_average).ceil()
}

/// 再訂購點 = ceil(日均消耗 × 平均提前期 + 安全庫存)
pub fn compute_reorder_point(
    daily_average: Decimal,
    lead_time_avg_days: Decimal,
    safety_stock: Decimal,
) -> Decimal {
    (daily_average * lead_time_avg_days + safety_stock).ceil()
}

/// 建議訂購量 = max(0, ceil(再訂購點 + 緩衝庫存 - 現有庫存))
pub fn compute_suggested_order(
    reorder_point: Decimal,
    buffer_stock: Decimal,
    current_stock: Decimal,
) -> Decimal {
    (reorder_point + buffer_stock - current_stock)
        .ceil()
        .max(Decimal::ZERO)
}

/// [`compute_safety_stock`] 的溢出檢查版本
pub fn checked_safety_stock(
    lead_time_max_days: Decimal,
    lead_time_avg_days: Decimal,
    daily_average: Decimal,
) -> Option<Decimal> {
    lead_time_max_days
        .checked_sub(lead_time_avg_days)?
        .checked_mul(daily_average)
        .map(|v| v.ceil())
}

/// [`compute_buffer_stock`] 的溢出檢查版本
pub fn checked_buffer_stock(risk_percentage: Decimal, monthly_average: Decimal) -> Option<Decimal> {
    risk_percentage
        .checked_div(Decimal::ONE_HUNDRED)?
        .checked_mul(monthly_average)
        .map(|v| v.ceil())
}

/// [`compute_reorder_point`] 的溢出檢查版本
pub fn checked_reorder_point(
    daily_average: Decimal,
    lead_time_avg_days: Decimal,
    safety_stock: Decimal,
) -> Option<Decimal> {
    daily_average
        .checked_mul(lead_time_avg_days)?
        .checked_add(safety_stock)
        .map(|v| v.ceil())
}

/// [`compute_suggested_order`] 的溢出檢查版本
pub fn checked_suggested_order(
    reorder_point: Decimal,
    buffer_stock: Decimal,
    current_stock: Decimal,
) -> Option<Decimal> {
    reorder_point
        .checked_add(buffer_stock)?
        .checked_sub(current_stock)
        .map(|v| v.ceil().max(Decimal::ZERO))
}

/// 庫存狀態分類（依序比對，先符合者為準）
pub fn classify_stock_status(
    current_stock: Decimal,
    safety_stock: Decimal,
    reorder_point: Decimal,
) -> StockStatus {
    if current_stock <= safety_stock {
        StockStatus::Critical
    } else if current_stock <= reorder_point {
        StockStatus::NeedsReorder
    } else {
        StockStatus::Healthy
    }
}
