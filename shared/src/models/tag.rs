//! Tag Model

use serde::{Deserialize, Serialize};

/// Tag reference attached to a product
///
/// The backend sends tags either as plain labels or as tag objects; both
/// normalize to the same label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagRef {
    Label(String),
    Object {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        slug: Option<String>,
    },
}

impl TagRef {
    /// Display label of the tag
    pub fn label(&self) -> &str {
        match self {
            Self::Label(label) => label,
            Self::Object { name, .. } => name,
        }
    }
}

impl From<&str> for TagRef {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}
