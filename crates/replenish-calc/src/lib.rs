//! # Replenishment Calculation Engine
//!
//! 補貨計算引擎：安全庫存、再訂購點、緩衝庫存、建議訂購量與庫存狀態

pub mod calculator;
pub mod coverage;
pub mod formulas;
pub mod planner;

use replenish_core::{
    ConsumptionStats, PurchaseSuggestion, ReplenishmentResult, StockCoverage, StockStatus,
};
use rust_decimal::Decimal;
use serde::Serialize;

// Re-export 主要類型
pub use calculator::ReplenishmentCalculator;
pub use coverage::{days_until_stockout, recommended_order_quantity};
pub use formulas::{
    classify_stock_status, compute_buffer_stock, compute_reorder_point, compute_safety_stock,
    compute_suggested_order,
};
pub use planner::ReplenishmentPlanner;

/// 批次補貨規劃結果
#[derive(Debug, Clone, Serialize)]
pub struct ReplenishmentReport {
    /// 每個成功計算的產品一行，順序與輸入一致
    pub lines: Vec<ReplenishmentLine>,

    /// 採購建議，依緊急程度排序
    pub suggestions: Vec<PurchaseSuggestion>,

    /// 警告信息
    pub warnings: Vec<ReplenishmentWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl ReplenishmentReport {
    /// 創建空的規劃結果
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            suggestions: Vec::new(),
            warnings: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: ReplenishmentWarning) {
        self.warnings.push(warning);
    }

    /// 依產品ID查找
    pub fn line(&self, product_id: &str) -> Option<&ReplenishmentLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    /// 指定狀態的產品
    pub fn lines_with_status(&self, status: StockStatus) -> impl Iterator<Item = &ReplenishmentLine> {
        self.lines
            .iter()
            .filter(move |line| line.result.status == status)
    }

    /// 各狀態的產品數量
    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for line in &self.lines {
            match line.result.status {
                StockStatus::Critical => counts.critical += 1,
                StockStatus::NeedsReorder => counts.needs_reorder += 1,
                StockStatus::Healthy => counts.healthy += 1,
            }
        }
        counts
    }

    /// 建議採購總量
    pub fn total_suggested_quantity(&self) -> Decimal {
        self.suggestions.iter().map(|s| s.quantity).sum()
    }

    /// 指定產品的警告
    pub fn warnings_for<'a>(&'a self, product_id: &'a str) -> impl Iterator<Item = &'a ReplenishmentWarning> {
        self.warnings.iter().filter(move |w| w.concerns(product_id))
    }

    /// 是否有錯誤級別的警告
    pub fn has_errors(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| w.severity() == WarningSeverity::Error)
    }
}

/// 單一產品的規劃結果
#[derive(Debug, Clone, Serialize)]
pub struct ReplenishmentLine {
    pub product_id: String,
    pub current_stock: Decimal,
    /// 實際使用的消耗統計（可能是預設值）
    pub consumption: ConsumptionStats,
    pub result: ReplenishmentResult,
    pub coverage: StockCoverage,
}

/// 各狀態產品數量
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub critical: usize,
    pub needs_reorder: usize,
    pub healthy: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.critical + self.needs_reorder + self.healthy
    }
}

/// 補貨規劃警告
#[derive(Debug, Clone, Serialize)]
pub struct ReplenishmentWarning {
    /// 產品ID；整批層級的警告為 None
    pub product_id: Option<String>,
    pub kind: WarningKind,
    pub message: String,
}

impl ReplenishmentWarning {
    /// 單一產品的警告
    pub fn for_product(product_id: impl Into<String>, kind: WarningKind, message: String) -> Self {
        Self {
            product_id: Some(product_id.into()),
            kind,
            message,
        }
    }

    /// 整批層級的警告
    pub fn batch(kind: WarningKind, message: String) -> Self {
        Self {
            product_id: None,
            kind,
            message,
        }
    }

    pub fn severity(&self) -> WarningSeverity {
        self.kind.severity()
    }

    /// 是否屬於指定產品
    pub fn concerns(&self, product_id: &str) -> bool {
        self.product_id.as_deref() == Some(product_id)
    }
}

/// 警告類別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningKind {
    /// 缺少消耗統計，改用預設值
    FallbackConsumption,
    /// 預計到貨前庫存耗盡
    StockoutBeforeReceipt,
    /// 同一產品在輸入中出現多次
    DuplicateProduct,
    /// 輸入不合法或計算溢出，產品被略過
    Rejected,
}

impl WarningKind {
    pub fn severity(&self) -> WarningSeverity {
        match self {
            Self::FallbackConsumption => WarningSeverity::Info,
            Self::StockoutBeforeReceipt | Self::DuplicateProduct => WarningSeverity::Warning,
            Self::Rejected => WarningSeverity::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum WarningSeverity {
    Info,
    Warning,
    Error,
}
