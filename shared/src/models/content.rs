//! Content block Model

use serde::{Deserialize, Serialize};

/// CMS content block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub id: String,
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub version: u32,
}
