//! # Replenish
//!
//! 藥局庫存補貨引擎：對外的統一入口

pub mod logging;

pub use replenish_calc as calc;
pub use replenish_core as model;

pub use replenish_calc::{
    ReplenishmentCalculator, ReplenishmentLine, ReplenishmentPlanner, ReplenishmentReport,
    ReplenishmentWarning, StatusCounts, WarningKind, WarningSeverity,
};
pub use replenish_core::{
    ConsumptionStats, OrderPolicy, PlannerConfig, PurchaseSuggestion, ReplenishError,
    ReplenishmentParameters, ReplenishmentResult, StockCoverage, StockLevel, StockStatus,
};
