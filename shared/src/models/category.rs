//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    /// Filter key used by the product listing (`category_slug`)
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
