//! 庫存水位模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ReplenishError, Result};

/// 單一產品在評估時點的庫存水位
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockLevel {
    /// 產品ID
    pub product_id: String,

    /// 現有庫存（實際在架數量）
    pub current_stock: Decimal,

    /// 最低庫存（僅月覆蓋訂購策略使用）
    #[serde(default)]
    pub min_stock: Decimal,
}

impl StockLevel {
    /// 創建新的庫存水位
    pub fn new(product_id: impl Into<String>, current_stock: Decimal) -> Self {
        Self {
            product_id: product_id.into(),
            current_stock,
            min_stock: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置最低庫存
    pub fn with_min_stock(mut self, min_stock: Decimal) -> Self {
        self.min_stock = min_stock;
        self
    }

    /// 檢查庫存數量是否合法
    pub fn validate(&self) -> Result<()> {
        for quantity in [self.current_stock, self.min_stock] {
            if quantity < Decimal::ZERO {
                return Err(ReplenishError::NegativeStock {
                    product_id: self.product_id.clone(),
                    quantity,
                });
            }
        }
        Ok(())
    }

    /// 檢查是否已無庫存
    pub fn is_out_of_stock(&self) -> bool {
        self.current_stock <= Decimal::ZERO
    }
}
