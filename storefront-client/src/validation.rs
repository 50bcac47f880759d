//! Input validation helpers
//!
//! Client-side checks that run before a request is built. A failing check
//! yields `ClientError::Validation` and never reaches the network layer.

use crate::error::{ClientError, ClientResult};

// ── Text length limits (mirrors the backend schema) ─────────────────

/// Product names
pub const MAX_NAME_LEN: usize = 160;

/// Product slugs
pub const MAX_SLUG_LEN: usize = 160;

/// Coupon codes
pub const MAX_CODE_LEN: usize = 64;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> ClientResult<()> {
    if value.trim().is_empty() {
        return Err(ClientError::validation(format!("{field} is required")));
    }
    if value.chars().count() > max_len {
        return Err(ClientError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        )));
    }
    Ok(())
}

/// Validate that an identifier used in a URL path is present.
pub fn validate_path_key(value: &str, field: &str) -> ClientResult<()> {
    if value.trim().is_empty() {
        return Err(ClientError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("SUMMER10", "Coupon code", MAX_CODE_LEN).is_ok());
        let err = validate_required_text("   ", "Coupon code", MAX_CODE_LEN).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Coupon code is required");
        assert!(validate_required_text(&"x".repeat(65), "Coupon code", MAX_CODE_LEN).is_err());
    }

    #[test]
    fn test_path_key() {
        assert!(validate_path_key("linen-shirt", "slug").is_ok());
        assert!(validate_path_key("", "slug").is_err());
    }
}
