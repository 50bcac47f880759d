//! Audit log Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product change record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAuditEntry {
    pub id: String,
    pub product_id: String,
    pub action: String,
    pub created_at: DateTime<Utc>,
}

/// Content change record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentAuditEntry {
    pub id: String,
    pub block_id: String,
    pub action: String,
    pub created_at: DateTime<Utc>,
}

/// `GET /audit` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    #[serde(default)]
    pub products: Vec<ProductAuditEntry>,
    #[serde(default)]
    pub content: Vec<ContentAuditEntry>,
}
