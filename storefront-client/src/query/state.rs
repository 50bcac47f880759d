// storefront-client/src/query/state.rs
// 列表查询状态 - 纯函数式状态转换

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::DEFAULT_PAGE_SIZE;

/// Listing sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        Self::Newest,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::NameAsc,
        Self::NameDesc,
    ];

    /// Wire value of the `sort` parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::NameAsc => "name_asc",
            Self::NameDesc => "name_desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
            Self::NameAsc => "Name: A → Z",
            Self::NameDesc => "Name: Z → A",
        }
    }
}

/// Tag filter kept in insertion order without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSelection(Vec<String>);

impl TagSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    /// Returns false when the tag was already selected
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    /// Returns false when the tag was not selected
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        self.0.len() != before
    }

    pub fn toggle(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.remove(&tag) {
            self.0.push(tag);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for TagSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = Self::new();
        for tag in iter {
            tags.insert(tag);
        }
        tags
    }
}

impl From<Vec<String>> for TagSelection {
    fn from(tags: Vec<String>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<TagSelection> for Vec<String> {
    fn from(tags: TagSelection) -> Self {
        tags.0
    }
}

/// One user-level change to the listing controls
#[derive(Debug, Clone, PartialEq)]
pub enum FilterChange {
    Search(String),
    Category(Option<String>),
    /// Raw text of the minimum price input
    MinPrice(String),
    /// Raw text of the maximum price input
    MaxPrice(String),
    AddTag(String),
    RemoveTag(String),
    ToggleTag(String),
    ClearTags,
    Sort(SortOption),
    Limit(u32),
    Page(u32),
    /// Back to defaults, keeping the page size
    Reset,
}

/// Normalized filter/sort/page selection of a product listing
///
/// Snapshots are immutable; [`QueryState::apply`] returns the next snapshot.
/// Any change other than [`FilterChange::Page`] resets `page` to 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredQuery")]
pub struct QueryState {
    search: String,
    category_slug: Option<String>,
    min_price: Option<Decimal>,
    max_price: Option<Decimal>,
    tags: TagSelection,
    sort: SortOption,
    page: u32,
    limit: u32,
}

/// Wire form of a snapshot, normalized on the way in
#[derive(Deserialize)]
struct StoredQuery {
    #[serde(default)]
    search: String,
    #[serde(default)]
    category_slug: Option<String>,
    #[serde(default)]
    min_price: Option<Decimal>,
    #[serde(default)]
    max_price: Option<Decimal>,
    #[serde(default)]
    tags: TagSelection,
    #[serde(default)]
    sort: SortOption,
    #[serde(default = "first_page")]
    page: u32,
    #[serde(default = "default_limit")]
    limit: u32,
}

fn first_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl From<StoredQuery> for QueryState {
    fn from(raw: StoredQuery) -> Self {
        let non_negative = |p: Option<Decimal>| p.filter(|v| !v.is_sign_negative());
        Self {
            search: raw.search.trim().to_string(),
            category_slug: raw
                .category_slug
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            min_price: non_negative(raw.min_price),
            max_price: non_negative(raw.max_price),
            tags: raw.tags,
            sort: raw.sort,
            page: raw.page.max(1),
            limit: raw.limit.max(1),
        }
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl QueryState {
    pub fn new(limit: u32) -> Self {
        Self {
            search: String::new(),
            category_slug: None,
            min_price: None,
            max_price: None,
            tags: TagSelection::new(),
            sort: SortOption::default(),
            page: 1,
            limit: limit.max(1),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category_slug(&self) -> Option<&str> {
        self.category_slug.as_deref()
    }

    pub fn min_price(&self) -> Option<Decimal> {
        self.min_price
    }

    pub fn max_price(&self) -> Option<Decimal> {
        self.max_price
    }

    pub fn tags(&self) -> &TagSelection {
        &self.tags
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Whether any narrowing filter is active
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty()
            || self.category_slug.is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || !self.tags.is_empty()
    }

    /// Next snapshot after `change`
    pub fn apply(&self, change: FilterChange) -> QueryState {
        let mut next = self.clone();
        match change {
            FilterChange::Page(page) => {
                next.page = page.max(1);
                return next;
            }
            FilterChange::Search(search) => next.search = search.trim().to_string(),
            FilterChange::Category(slug) => {
                next.category_slug = slug
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty());
            }
            FilterChange::MinPrice(raw) => next.min_price = parse_price(&raw),
            FilterChange::MaxPrice(raw) => next.max_price = parse_price(&raw),
            FilterChange::AddTag(tag) => {
                next.tags.insert(tag);
            }
            FilterChange::RemoveTag(tag) => {
                next.tags.remove(&tag);
            }
            FilterChange::ToggleTag(tag) => next.tags.toggle(tag),
            FilterChange::ClearTags => next.tags = TagSelection::new(),
            FilterChange::Sort(sort) => next.sort = sort,
            FilterChange::Limit(limit) => {
                if limit > 0 {
                    next.limit = limit;
                }
            }
            FilterChange::Reset => next = QueryState::new(self.limit),
        }
        next.page = 1;
        next
    }

    /// Same selection at `page`, used when the backend reports a clamped page
    pub(crate) fn with_page(&self, page: u32) -> QueryState {
        QueryState {
            page: page.max(1),
            ..self.clone()
        }
    }
}

/// Parse a price input; empty, non-numeric or negative text is absent
pub fn parse_price(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw)
        .ok()
        .filter(|price| !price.is_sign_negative())
}
