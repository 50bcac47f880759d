//! Shared types for the storefront workspace
//!
//! Wire types exchanged with the catalog REST backend: catalog entities,
//! admin resources, pagination envelopes and the backend error body.

pub mod error;
pub mod models;
pub mod pagination;

// Re-exports
pub use error::ApiErrorBody;
pub use pagination::{Page, PaginationMeta};
pub use serde::{Deserialize, Serialize};
