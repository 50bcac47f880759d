//! Admin dashboard summary Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline counters of the admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminSummary {
    pub products: u64,
    pub orders: u64,
    pub users: u64,
    pub low_stock: u64,
    /// Revenue over the last 30 days
    pub sales_30d: Decimal,
    pub orders_30d: u64,
}

/// Product whose stock fell below the low-stock threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowStockItem {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub sku: Option<String>,
    pub stock_quantity: i64,
}
