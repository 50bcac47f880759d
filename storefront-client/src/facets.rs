// storefront-client/src/facets.rs
// 标签分面 - 从当前结果页派生

use std::collections::BTreeSet;

use shared::models::Product;

/// Tag facet state of the listing
///
/// `NoData` is distinct from a loaded but empty set: after a failed fetch the
/// UI shows "no data" rather than "no tags".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Facets {
    #[default]
    NoData,
    Tags(BTreeSet<String>),
}

impl Facets {
    pub fn tags(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::NoData => None,
            Self::Tags(tags) => Some(tags),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Tags(_))
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags().is_some_and(|tags| tags.contains(tag))
    }
}

/// Distinct, sorted tag labels over `items`
///
/// Plain-label and object-form tags with the same label count once.
pub fn collect_tags<'a>(items: impl IntoIterator<Item = &'a Product>) -> BTreeSet<String> {
    items
        .into_iter()
        .flat_map(Product::tag_labels)
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

/// Holds the facets derived from the latest accepted page
#[derive(Debug, Clone, Default)]
pub struct FacetAccumulator {
    facets: Facets,
}

impl FacetAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    /// Recompute from a fresh result page; replaces any previous facets
    pub fn recompute(&mut self, items: &[Product]) -> BTreeSet<String> {
        let tags = collect_tags(items);
        self.facets = Facets::Tags(tags.clone());
        tags
    }

    /// Mark facets unavailable (failed fetch)
    pub fn clear(&mut self) {
        self.facets = Facets::NoData;
    }
}
