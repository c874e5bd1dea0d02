//! 採購建議模型

use chrono::{Duration, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ReplenishError, Result, StockCoverage, StockStatus};

/// 採購建議（批次補貨規劃的輸出）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseSuggestion {
    /// 建議ID
    pub id: Uuid,

    /// 產品ID
    pub product_id: String,

    /// 建議數量
    pub quantity: Decimal,

    /// 庫存狀態
    pub status: StockStatus,

    /// 可支撐天數
    pub coverage: StockCoverage,

    /// 下單日期
    pub order_date: NaiveDate,

    /// 預計到貨日期
    pub expected_receipt_date: NaiveDate,
}

impl PurchaseSuggestion {
    /// 創建採購建議，到貨日 = 下單日 + ceil(平均提前期)
    pub fn new(
        product_id: String,
        quantity: Decimal,
        status: StockStatus,
        coverage: StockCoverage,
        order_date: NaiveDate,
        lead_time_avg_days: Decimal,
    ) -> Result<Self> {
        let lead_days = lead_time_avg_days
            .ceil()
            .to_i64()
            .ok_or_else(|| ReplenishError::InvalidDate(format!("提前期 {}", lead_time_avg_days)))?;

        let expected_receipt_date = order_date
            .checked_add_signed(Duration::days(lead_days))
            .ok_or_else(|| ReplenishError::InvalidDate(format!("{} + {} 天", order_date, lead_days)))?;

        Ok(Self {
            id: Uuid::new_v4(),
            product_id,
            quantity,
            status,
            coverage,
            order_date,
            expected_receipt_date,
        })
    }

    /// 預計在到貨前缺貨
    pub fn stocks_out_before_receipt(&self) -> bool {
        let lead_days = (self.expected_receipt_date - self.order_date).num_days();
        match self.coverage.days() {
            // 超出 i64 範圍的天數必然足以撐到到貨
            Some(days) => i64::try_from(days).map_or(false, |days| days < lead_days),
            None => false,
        }
    }
}
