// storefront-client/src/views/listing.rs
// 商品列表视图 - 查询、分页、分面

use shared::PaginationMeta;
use shared::models::{Category, Product};
use shared::Page;

use crate::ClientResult;
use crate::api::StorefrontClient;
use crate::facets::{FacetAccumulator, Facets};
use crate::http::{HttpClient, QueryParams};
use crate::query::{FilterChange, QueryState, build_request, map_response};
use crate::store::ResourceStore;

/// Handle of one issued listing request
///
/// Only the ticket of the most recently issued request is accepted by
/// [`ProductListing::complete`], and only once.
#[derive(Debug, PartialEq)]
pub struct FetchTicket {
    seq: u64,
    query: QueryState,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Request parameters for this ticket's snapshot
    pub fn params(&self) -> QueryParams {
        build_request(&self.query)
    }
}

/// Whether a completed request was allowed to write state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// Superseded by a later request; discarded
    Stale,
}

/// Shop listing: query controls, current page, facets and categories
#[derive(Debug, Clone)]
pub struct ProductListing {
    query: QueryState,
    store: ResourceStore<Product>,
    meta: Option<PaginationMeta>,
    facets: FacetAccumulator,
    categories: Vec<Category>,
    loading: bool,
    last_error: Option<String>,
    issued: u64,
    settled: u64,
}

impl Default for ProductListing {
    fn default() -> Self {
        Self::with_query(QueryState::default())
    }
}

impl ProductListing {
    pub fn new(limit: u32) -> Self {
        Self::with_query(QueryState::new(limit))
    }

    pub fn with_query(query: QueryState) -> Self {
        Self {
            query,
            store: ResourceStore::new(),
            meta: None,
            facets: FacetAccumulator::new(),
            categories: Vec::new(),
            loading: false,
            last_error: None,
            issued: 0,
            settled: 0,
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn items(&self) -> &[Product] {
        self.store.items()
    }

    pub fn store(&self) -> &ResourceStore<Product> {
        &self.store
    }

    pub fn meta(&self) -> Option<&PaginationMeta> {
        self.meta.as_ref()
    }

    pub fn facets(&self) -> &Facets {
        self.facets.facets()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Apply a control change and issue a request for the new snapshot
    pub fn apply(&mut self, change: FilterChange) -> FetchTicket {
        self.query = self.query.apply(change);
        self.begin_fetch()
    }

    /// Issue a request for the current snapshot
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        self.loading = true;
        tracing::debug!(seq = self.issued, page = self.query.page(), "Listing fetch issued");
        FetchTicket {
            seq: self.issued,
            query: self.query.clone(),
        }
    }

    /// Settle a request; stale tickets are discarded without touching state
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: ClientResult<Page<Product>>,
    ) -> FetchOutcome {
        if ticket.seq != self.issued || ticket.seq == self.settled {
            tracing::debug!(seq = ticket.seq, latest = self.issued, "Stale listing response dropped");
            return FetchOutcome::Stale;
        }

        self.settled = ticket.seq;
        self.loading = false;
        match result {
            Ok(page) => {
                let result = map_response(&ticket.query, page);
                if result.page_adjusted() {
                    self.query = ticket.query.with_page(result.meta.page);
                }
                self.store.replace_all(result.items);
                self.facets.recompute(self.store.items());
                self.meta = Some(result.meta);
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Listing fetch failed");
                self.store.clear();
                self.meta = None;
                self.facets.clear();
                self.last_error = Some(e.user_message());
            }
        }
        FetchOutcome::Applied
    }

    /// Move `delta` pages; `None` without metadata or outside `[1, total_pages]`
    pub fn change_page(&mut self, delta: i64) -> Option<FetchTicket> {
        let meta = self.meta?;
        let target = i64::from(meta.page) + delta;
        if target < 1 || target > i64::from(meta.total_pages) {
            return None;
        }
        Some(self.apply(FilterChange::Page(target as u32)))
    }

    pub fn reset_filters(&mut self) -> FetchTicket {
        self.apply(FilterChange::Reset)
    }

    /// Run `ticket` against `client` and settle it
    pub async fn fetch<C: HttpClient>(
        &mut self,
        client: &StorefrontClient<C>,
        ticket: FetchTicket,
    ) -> FetchOutcome {
        let result = client.list_products(&ticket.params()).await;
        self.complete(ticket, result)
    }

    /// Reload the current snapshot
    pub async fn refresh<C: HttpClient>(&mut self, client: &StorefrontClient<C>) -> FetchOutcome {
        let ticket = self.begin_fetch();
        self.fetch(client, ticket).await
    }

    /// Load the category sidebar; failure leaves it empty
    pub async fn load_categories<C: HttpClient>(&mut self, client: &StorefrontClient<C>) {
        match client.list_categories().await {
            Ok(categories) => self.categories = categories,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load categories");
                self.categories.clear();
            }
        }
    }
}
