//! Backend error body
//!
//! The backend answers non-2xx requests with a JSON body that carries either
//! a `detail` (string or list of field errors) or a `message`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error payload returned by the REST backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Build an error body with a plain `detail` string
    pub fn detail(message: impl Into<String>) -> Self {
        Self {
            detail: Some(Value::String(message.into())),
            message: None,
        }
    }

    /// Best human-readable message contained in the body
    ///
    /// Field-error lists (`[{"msg": ...}, ...]`) are joined with `; `.
    pub fn summary(&self) -> Option<String> {
        match &self.detail {
            Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
            Some(Value::Array(errors)) => {
                let parts: Vec<&str> = errors
                    .iter()
                    .filter_map(|e| e.get("msg").and_then(Value::as_str))
                    .collect();
                if !parts.is_empty() {
                    return Some(parts.join("; "));
                }
            }
            _ => {}
        }
        self.message.clone().filter(|m| !m.is_empty())
    }
}
