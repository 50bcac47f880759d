// storefront-client/src/query/list.rs
// 列表请求构建与响应映射

use shared::models::Product;
use shared::{Page, PaginationMeta};

use super::QueryState;
use crate::http::QueryParams;

/// Normalized listing response
#[derive(Debug, Clone, PartialEq)]
pub struct ListResult {
    pub items: Vec<Product>,
    /// Metadata with `page` clamped into range
    pub meta: PaginationMeta,
    /// Page that was asked for
    pub requested_page: u32,
}

impl ListResult {
    /// The backend answered with a different page than requested
    pub fn page_adjusted(&self) -> bool {
        self.meta.page != self.requested_page
    }
}

/// Request parameters for a snapshot
///
/// Empty fields are omitted; `sort`, `page` and `limit` are always sent.
/// Each selected tag is sent as its own `tags` pair.
pub fn build_request(state: &QueryState) -> QueryParams {
    let mut params: QueryParams = Vec::new();

    if !state.search().is_empty() {
        params.push(("search".into(), state.search().to_string()));
    }
    if let Some(slug) = state.category_slug() {
        params.push(("category_slug".into(), slug.to_string()));
    }
    if let Some(min) = state.min_price() {
        params.push(("min_price".into(), min.to_string()));
    }
    if let Some(max) = state.max_price() {
        params.push(("max_price".into(), max.to_string()));
    }
    for tag in state.tags().iter() {
        params.push(("tags".into(), tag.to_string()));
    }

    params.push(("sort".into(), state.sort().as_str().to_string()));
    params.push(("page".into(), state.page().to_string()));
    params.push(("limit".into(), state.limit().to_string()));
    params
}

/// Normalize a backend page for `state`
pub fn map_response(state: &QueryState, page: Page<Product>) -> ListResult {
    let meta = page.meta.clamped();
    if meta.page != state.page() {
        tracing::debug!(
            requested = state.page(),
            page = meta.page,
            total_pages = meta.total_pages,
            "Listing page adjusted by backend"
        );
    }

    ListResult {
        items: page.items,
        meta,
        requested_page: state.page(),
    }
}
