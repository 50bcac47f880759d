//! View models
//!
//! UI-agnostic state holders for the storefront pages. Each view owns its
//! stores; nothing is shared between views.

mod admin;
mod detail;
mod listing;

pub use admin::{AdminDashboard, ProductForm};
pub use detail::ProductDetail;
pub use listing::{FetchOutcome, FetchTicket, ProductListing};
