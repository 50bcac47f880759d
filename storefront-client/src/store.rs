// storefront-client/src/store.rs
// 资源缓存 - 确认后合并

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use shared::models::{Category, ContentBlock, Coupon, LowStockItem, Order, Product, User};

use crate::ClientResult;

/// Entity with a stable identity inside a [`ResourceStore`]
pub trait Identifiable {
    type Id: Eq + Hash + Clone + Debug;

    fn id(&self) -> &Self::Id;
}

macro_rules! impl_identifiable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Identifiable for $ty {
                type Id = String;

                fn id(&self) -> &String {
                    &self.id
                }
            }
        )*
    };
}

impl_identifiable!(Product, Category, Order, User, Coupon, ContentBlock, LowStockItem);

/// Lifecycle of one mutation request
#[derive(Debug, Clone, PartialEq)]
pub enum MutationState<T> {
    Pending,
    /// Entity as returned by the backend
    Confirmed(T),
    Failed(String),
}

impl<T> MutationState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl<T> From<ClientResult<T>> for MutationState<T> {
    fn from(result: ClientResult<T>) -> Self {
        match result {
            Ok(entity) => Self::Confirmed(entity),
            Err(e) => Self::Failed(e.user_message()),
        }
    }
}

/// Effect of a store write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorePatch {
    /// Entity replaced at this position
    Replaced(usize),
    /// Entity appended at this position
    Appended(usize),
    Prepended,
    Removed(usize),
    Unchanged,
}

/// Id-indexed cache of one resource collection
///
/// Mutations only reach `items` once the backend confirms them; a failed
/// mutation leaves the cache exactly as it was.
#[derive(Debug, Clone)]
pub struct ResourceStore<T: Identifiable> {
    items: Vec<T>,
    index: HashMap<T::Id, usize>,
    mutations: HashMap<T::Id, MutationState<T>>,
}

impl<T: Identifiable> Default for ResourceStore<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
            mutations: HashMap::new(),
        }
    }
}

impl<T: Identifiable + Clone> ResourceStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<T>) -> Self {
        let mut store = Self::new();
        store.replace_all(items);
        store
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    pub fn position(&self, id: &T::Id) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.index.contains_key(id)
    }

    /// Ids in display order
    pub fn ids(&self) -> Vec<T::Id> {
        self.items.iter().map(|item| item.id().clone()).collect()
    }

    /// Replace the whole collection after a (re)load
    ///
    /// Duplicate ids keep their first occurrence. Mutation markers reset.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.index.clear();
        self.mutations.clear();
        self.items = Vec::with_capacity(items.len());
        for item in items {
            if self.index.contains_key(item.id()) {
                tracing::debug!(id = ?item.id(), "Duplicate id dropped on load");
                continue;
            }
            self.index.insert(item.id().clone(), self.items.len());
            self.items.push(item);
        }
    }

    /// Merge a confirmed entity: replace in place, or append when unknown
    pub fn apply_optimistic(&mut self, confirmed: T) -> StorePatch {
        match self.index.get(confirmed.id()).copied() {
            Some(pos) => {
                self.items[pos] = confirmed;
                StorePatch::Replaced(pos)
            }
            None => {
                let pos = self.items.len();
                self.index.insert(confirmed.id().clone(), pos);
                self.items.push(confirmed);
                StorePatch::Appended(pos)
            }
        }
    }

    /// Insert a newly created entity at the front
    pub fn prepend(&mut self, created: T) -> StorePatch {
        if self.contains(created.id()) {
            return self.apply_optimistic(created);
        }
        self.items.insert(0, created);
        self.reindex();
        StorePatch::Prepended
    }

    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let pos = self.index.get(id).copied()?;
        let removed = self.items.remove(pos);
        self.mutations.remove(id);
        self.reindex();
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.index.clear();
        self.mutations.clear();
    }

    /// Mark a mutation in flight for `id`
    pub fn begin_mutation(&mut self, id: &T::Id) {
        self.mutations.insert(id.clone(), MutationState::Pending);
    }

    /// Settle the mutation for `id`
    ///
    /// `Confirmed` merges the entity and clears the marker; `Failed` keeps the
    /// reason and touches nothing else.
    pub fn settle(&mut self, id: &T::Id, outcome: MutationState<T>) -> StorePatch {
        match outcome {
            MutationState::Confirmed(entity) => {
                self.mutations.remove(id);
                self.apply_optimistic(entity)
            }
            other => {
                self.mutations.insert(id.clone(), other);
                StorePatch::Unchanged
            }
        }
    }

    /// Settle a delete for `id`: removal only after confirmation
    pub fn settle_removal(&mut self, id: &T::Id, outcome: MutationState<()>) -> StorePatch {
        match outcome {
            MutationState::Confirmed(()) => match self.position(id) {
                Some(pos) => {
                    self.remove(id);
                    StorePatch::Removed(pos)
                }
                None => StorePatch::Unchanged,
            },
            MutationState::Pending => {
                self.mutations.insert(id.clone(), MutationState::Pending);
                StorePatch::Unchanged
            }
            MutationState::Failed(reason) => {
                self.mutations
                    .insert(id.clone(), MutationState::Failed(reason));
                StorePatch::Unchanged
            }
        }
    }

    pub fn mutation(&self, id: &T::Id) -> Option<&MutationState<T>> {
        self.mutations.get(id)
    }

    pub fn is_pending(&self, id: &T::Id) -> bool {
        self.mutation(id).is_some_and(MutationState::is_pending)
    }

    pub fn has_pending(&self) -> bool {
        self.mutations.values().any(MutationState::is_pending)
    }

    fn reindex(&mut self) {
        self.index = self
            .items
            .iter()
            .enumerate()
            .map(|(pos, item)| (item.id().clone(), pos))
            .collect();
    }
}
