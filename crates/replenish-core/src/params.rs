//! 補貨參數配置

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ReplenishError, Result};

/// 補貨計算參數
///
/// 所有欄位皆有預設值，部分缺漏的 JSON 配置會以預設值補齊。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplenishmentParameters {
    /// 平均提前期（天）
    pub lead_time_avg_days: Decimal,

    /// 最長提前期（天），必須不小於平均提前期
    pub lead_time_max_days: Decimal,

    /// 風險百分比（0-100），套用於月均消耗
    pub risk_percentage: Decimal,

    /// 建議訂購量的計算策略
    pub order_policy: OrderPolicy,
}

impl Default for ReplenishmentParameters {
    fn default() -> Self {
        Self {
            lead_time_avg_days: Decimal::from(3),
            lead_time_max_days: Decimal::from(5),
            risk_percentage: Decimal::from(20),
            order_policy: OrderPolicy::TargetLevel,
        }
    }
}

impl ReplenishmentParameters {
    /// 創建參數（未指定的欄位使用預設值）
    pub fn new(lead_time_avg_days: Decimal, lead_time_max_days: Decimal) -> Self {
        Self {
            lead_time_avg_days,
            lead_time_max_days,
            ..Self::default()
        }
    }

    /// 建構器模式：設置平均提前期
    pub fn with_lead_time_avg_days(mut self, days: Decimal) -> Self {
        self.lead_time_avg_days = days;
        self
    }

    /// 建構器模式：設置最長提前期
    pub fn with_lead_time_max_days(mut self, days: Decimal) -> Self {
        self.lead_time_max_days = days;
        self
    }

    /// 建構器模式：設置風險百分比
    pub fn with_risk_percentage(mut self, percentage: Decimal) -> Self {
        self.risk_percentage = percentage;
        self
    }

    /// 建構器模式：設置訂購策略
    pub fn with_order_policy(mut self, policy: OrderPolicy) -> Self {
        self.order_policy = policy;
        self
    }

    /// 從 JSON 載入並驗證
    ///
    /// # 範例
    /// ```
    /// # use replenish_core::ReplenishmentParameters;
    /// # use rust_decimal::Decimal;
    /// let params = ReplenishmentParameters::from_json_str(r#"{ "risk_percentage": 35 }"#).unwrap();
    /// assert_eq!(params.risk_percentage, Decimal::from(35));
    /// assert_eq!(params.lead_time_avg_days, Decimal::from(3));
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// 驗證參數
    pub fn validate(&self) -> Result<()> {
        if self.lead_time_avg_days <= Decimal::ZERO {
            return Err(ReplenishError::InvalidLeadTime(format!(
                "平均提前期 {}",
                self.lead_time_avg_days
            )));
        }
        if self.lead_time_max_days <= Decimal::ZERO {
            return Err(ReplenishError::InvalidLeadTime(format!(
                "最長提前期 {}",
                self.lead_time_max_days
            )));
        }
        if self.lead_time_max_days < self.lead_time_avg_days {
            return Err(ReplenishError::LeadTimeOrdering {
                avg: self.lead_time_avg_days,
                max: self.lead_time_max_days,
            });
        }
        if self.risk_percentage < Decimal::ZERO || self.risk_percentage > Decimal::ONE_HUNDRED {
            return Err(ReplenishError::RiskOutOfRange(self.risk_percentage));
        }
        self.order_policy.validate()
    }

    /// 提前期的不確定區間（最長 - 平均）
    pub fn lead_time_gap_days(&self) -> Decimal {
        self.lead_time_max_days - self.lead_time_avg_days
    }
}

/// 建議訂購量策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderPolicy {
    /// 目標水位：補足至 再訂購點 + 緩衝庫存
    #[default]
    TargetLevel,

    /// 月覆蓋：月均消耗 × 月數 + 最低庫存（不扣除現有庫存）
    MonthlyCover { months: u32 },
}

impl OrderPolicy {
    /// 產品表使用的兩個月覆蓋
    pub const TWO_MONTH_COVER: Self = Self::MonthlyCover { months: 2 };

    fn validate(&self) -> Result<()> {
        match self {
            Self::TargetLevel => Ok(()),
            Self::MonthlyCover { months: 0 } => Err(ReplenishError::InvalidOrderPolicy(
                "月覆蓋月數必須大於 0".to_string(),
            )),
            Self::MonthlyCover { .. } => Ok(()),
        }
    }
}

/// 批次補貨規劃的配置：預設參數與個別產品覆寫
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// 預設參數
    pub defaults: ReplenishmentParameters,

    /// 個別產品的參數覆寫（產品ID -> 參數）
    pub overrides: HashMap<String, ReplenishmentParameters>,
}

impl PlannerConfig {
    /// 從 JSON 載入並驗證所有參數
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.defaults.validate()?;
        for params in config.overrides.values() {
            params.validate()?;
        }
        Ok(config)
    }

    /// 建構器模式：添加產品覆寫
    pub fn with_override(mut self, product_id: impl Into<String>, params: ReplenishmentParameters) -> Self {
        self.overrides.insert(product_id.into(), params);
        self
    }

    /// 取得產品適用的參數
    pub fn parameters_for(&self, product_id: &str) -> &ReplenishmentParameters {
        self.overrides.get(product_id).unwrap_or(&self.defaults)
    }
}
