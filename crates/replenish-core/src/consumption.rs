//! 消耗統計模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ReplenishError, Result};

/// 缺少統計資料時使用的日均消耗
const FALLBACK_DAILY_AVERAGE: u32 = 5;

/// 日均換算月均的天數
const DAYS_PER_MONTH: u32 = 30;

/// 單一產品的歷史消耗速率
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionStats {
    /// 日均消耗
    pub daily_average: Decimal,

    /// 月均消耗
    pub monthly_average: Decimal,
}

impl ConsumptionStats {
    pub fn new(daily_average: Decimal, monthly_average: Decimal) -> Self {
        Self {
            daily_average,
            monthly_average,
        }
    }

    /// 以日均推算月均（日均 × 30）
    pub fn from_daily(daily_average: Decimal) -> Self {
        Self::new(daily_average, daily_average * Decimal::from(DAYS_PER_MONTH))
    }

    /// 缺少統計資料時的預設值：日均 5，月均 150
    pub fn fallback() -> Self {
        Self::from_daily(Decimal::from(FALLBACK_DAILY_AVERAGE))
    }

    /// 有統計資料則使用，否則退回預設值
    pub fn or_fallback(stats: Option<Self>) -> Self {
        stats.unwrap_or_else(Self::fallback)
    }

    /// 檢查消耗量是否合法
    pub fn validate(&self) -> Result<()> {
        if self.daily_average < Decimal::ZERO {
            return Err(ReplenishError::NegativeConsumption(format!(
                "日均 {}",
                self.daily_average
            )));
        }
        if self.monthly_average < Decimal::ZERO {
            return Err(ReplenishError::NegativeConsumption(format!(
                "月均 {}",
                self.monthly_average
            )));
        }
        Ok(())
    }

    /// 是否有實際消耗
    pub fn is_consuming(&self) -> bool {
        self.daily_average > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_stats() {
        let stats = ConsumptionStats::fallback();

        assert_eq!(stats.daily_average, Decimal::from(5));
        assert_eq!(stats.monthly_average, Decimal::from(150));
        assert!(stats.is_consuming());
    }

    #[test]
    fn test_or_fallback_keeps_supplied_stats() {
        let supplied = ConsumptionStats::new(Decimal::from(2), Decimal::from(61));

        assert_eq!(ConsumptionStats::or_fallback(Some(supplied)), supplied);
        assert_eq!(
            ConsumptionStats::or_fallback(None),
            ConsumptionStats::fallback()
        );
    }

    #[test]
    fn test_negative_consumption_rejected() {
        let stats = ConsumptionStats::new(Decimal::from(-1), Decimal::from(10));
        assert!(matches!(
            stats.validate(),
            Err(ReplenishError::NegativeConsumption(_))
        ));

        let stats = ConsumptionStats::new(Decimal::from(1), Decimal::from(-10));
        assert!(stats.validate().is_err());
    }
}
