//! Storefront Client - catalog and admin client for the storefront backend
//!
//! Provides the HTTP transport, typed endpoint wrappers and the UI-agnostic
//! state core of the storefront: listing queries, selection, resource
//! caches and tag facets.

pub mod api;
pub mod config;
pub mod error;
pub mod facets;
pub mod http;
pub mod logger;
pub mod notice;
pub mod query;
pub mod selection;
pub mod store;
pub mod validation;
pub mod views;

pub use api::{HealthStatus, StorefrontClient};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, ErrorKind};
pub use facets::{FacetAccumulator, Facets};
pub use http::{FileUpload, HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http::OneshotHttpClient;
pub use notice::{Notice, Notifier};
pub use query::{FilterChange, ListResult, QueryState, SortOption};
pub use selection::SelectionSet;
pub use store::{Identifiable, MutationState, ResourceStore, StorePatch};
pub use views::{AdminDashboard, FetchOutcome, FetchTicket, ProductDetail, ProductForm, ProductListing};

// Re-export shared types for convenience
pub use shared::models;
pub use shared::{Page, PaginationMeta};
