//! Coupon Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Coupon entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: String,
    pub code: String,
    #[serde(default)]
    pub percentage_off: Option<Decimal>,
    #[serde(default)]
    pub amount_off: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<String>,
    pub active: bool,
}

/// Create coupon payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponCreate {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_off: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_off: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub active: bool,
}

impl Default for CouponCreate {
    fn default() -> Self {
        Self {
            code: String::new(),
            percentage_off: None,
            amount_off: None,
            currency: Some("USD".to_string()),
            active: true,
        }
    }
}

/// Update coupon payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CouponUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_off: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_off: Option<Decimal>,
}
