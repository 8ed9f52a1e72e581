//! Product (stock-keeping unit) models

use serde::{Deserialize, Serialize};

/// A named stock-keeping unit with its total quantity on hand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Total stock on hand, never negative
    pub quantity: i64,
    /// Location the product is stored at; `None` means unassigned
    pub location_id: Option<i64>,
}

/// Compact product record returned by the location filter endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
}

impl From<Product> for ProductSummary {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            quantity: product.quantity,
        }
    }
}

/// Direction of a single-unit stock adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAdjustment {
    Add,
    Reduce,
}

impl StockAdjustment {
    /// Signed change applied to the stored quantity
    pub fn delta(&self) -> i64 {
        match self {
            StockAdjustment::Add => 1,
            StockAdjustment::Reduce => -1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockAdjustment::Add => "add",
            StockAdjustment::Reduce => "reduce",
        }
    }
}
