//! Data models
//!
//! Read projections and write payloads of the storefront REST API.
//! IDs are opaque strings; products are additionally addressed by slug.

pub mod audit;
pub mod category;
pub mod content;
pub mod coupon;
pub mod order;
pub mod product;
pub mod summary;
pub mod tag;
pub mod user;

// Re-exports
pub use audit::*;
pub use category::*;
pub use content::*;
pub use coupon::*;
pub use order::*;
pub use product::*;
pub use summary::*;
pub use tag::*;
pub use user::*;
