//! Product listing query
//!
//! [`QueryState`] is the immutable snapshot of the listing controls;
//! [`list`] turns a snapshot into request parameters and a backend page into
//! a normalized result.

pub mod list;
mod state;

pub use list::{ListResult, build_request, map_response};
pub use state::{FilterChange, QueryState, SortOption, TagSelection, parse_price};
