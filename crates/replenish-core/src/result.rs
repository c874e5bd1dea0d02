//! 補貨計算結果模型

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 庫存狀態
///
/// 排序依緊急程度：`Critical` 最緊急。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    /// 危急：現有庫存不高於安全庫存
    Critical,
    /// 需補貨：現有庫存不高於再訂購點
    NeedsReorder,
    /// 健康
    Healthy,
}

impl StockStatus {
    /// 顯示用徽章顏色
    pub fn badge_color(&self) -> &'static str {
        match self {
            Self::Critical => "red",
            Self::NeedsReorder => "amber",
            Self::Healthy => "green",
        }
    }

    /// 顯示用標籤
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "危急",
            Self::NeedsReorder => "需補貨",
            Self::Healthy => "正常",
        }
    }

    /// 是否需要採購
    pub fn requires_action(&self) -> bool {
        !matches!(self, Self::Healthy)
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 單一產品的補貨計算結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplenishmentResult {
    /// 安全庫存
    pub safety_stock: Decimal,

    /// 緩衝庫存
    pub buffer_stock: Decimal,

    /// 再訂購點
    pub reorder_point: Decimal,

    /// 建議訂購量
    pub suggested_order: Decimal,

    /// 庫存狀態
    pub status: StockStatus,
}

impl ReplenishmentResult {
    /// 目標庫存水位（再訂購點 + 緩衝庫存）
    pub fn target_level(&self) -> Decimal {
        self.reorder_point + self.buffer_stock
    }

    /// 是否建議下單
    pub fn should_order(&self) -> bool {
        self.suggested_order > Decimal::ZERO
    }
}

/// 庫存可支撐天數
///
/// 排序時任何有限天數皆小於 `Unlimited`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StockCoverage {
    /// 按日均消耗推算的可支撐天數
    Days(u64),
    /// 無消耗，永不缺貨
    Unlimited,
}

impl StockCoverage {
    /// 天數（無限時為 None）
    pub fn days(&self) -> Option<u64> {
        match self {
            Self::Days(days) => Some(*days),
            Self::Unlimited => None,
        }
    }
}

impl fmt::Display for StockCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Days(days) => write!(f, "{days}"),
            Self::Unlimited => f.write_str("∞"),
        }
    }
}
