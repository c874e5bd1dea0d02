//! # Replenish Core
//!
//! 補貨計算的核心資料模型與類型定義

pub mod consumption;
pub mod params;
pub mod result;
pub mod stock;
pub mod suggestion;

// Re-export 主要類型
pub use consumption::ConsumptionStats;
pub use params::{OrderPolicy, PlannerConfig, ReplenishmentParameters};
pub use result::{ReplenishmentResult, StockCoverage, StockStatus};
pub use stock::StockLevel;
pub use suggestion::PurchaseSuggestion;

/// 補貨計算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ReplenishError {
    #[error("庫存數量不可為負: {product_id} = {quantity}")]
    NegativeStock {
        product_id: String,
        quantity: rust_decimal::Decimal,
    },

    #[error("庫存數量不可為負: {0}")]
    NegativeQuantity(rust_decimal::Decimal),

    #[error("消耗量不可為負: {0}")]
    NegativeConsumption(String),

    #[error("提前期必須為正數: {0}")]
    InvalidLeadTime(String),

    #[error("最長提前期 {max} 小於平均提前期 {avg}")]
    LeadTimeOrdering {
        avg: rust_decimal::Decimal,
        max: rust_decimal::Decimal,
    },

    #[error("風險百分比必須介於 0 與 100 之間: {0}")]
    RiskOutOfRange(rust_decimal::Decimal),

    #[error("訂購策略參數無效: {0}")]
    InvalidOrderPolicy(String),

    #[error("計算溢出: {0}")]
    Overflow(String),

    #[error("配置解析失敗: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("無效的日期: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, ReplenishError>;
