// storefront-client/src/selection.rs
// 批量选择集合

use std::collections::HashSet;
use std::hash::Hash;

/// Multi-select state over a backing collection of ids
///
/// Selected ids are always a subset of the backing ids; [`prune`] keeps that
/// true when the backing collection reloads.
///
/// [`prune`]: SelectionSet::prune
#[derive(Debug, Clone)]
pub struct SelectionSet<Id> {
    backing: Vec<Id>,
    selected: HashSet<Id>,
}

impl<Id> Default for SelectionSet<Id> {
    fn default() -> Self {
        Self {
            backing: Vec::new(),
            selected: HashSet::new(),
        }
    }
}

impl<Id: Eq + Hash + Clone> SelectionSet<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backing(ids: impl IntoIterator<Item = Id>) -> Self {
        let mut set = Self::new();
        set.prune(ids);
        set
    }

    /// Flip one id; ids outside the backing collection are ignored
    ///
    /// Returns whether the id is selected afterwards.
    pub fn toggle(&mut self, id: &Id) -> bool {
        if !self.backing.contains(id) {
            return false;
        }
        if !self.selected.remove(id) {
            self.selected.insert(id.clone());
            return true;
        }
        false
    }

    /// Set one id to `checked`
    pub fn set(&mut self, id: &Id, checked: bool) {
        if checked {
            if self.backing.contains(id) {
                self.selected.insert(id.clone());
            }
        } else {
            self.selected.remove(id);
        }
    }

    /// Select every backing id, or none
    pub fn toggle_all(&mut self, checked: bool) {
        if checked {
            self.selected = self.backing.iter().cloned().collect();
        } else {
            self.selected.clear();
        }
    }

    /// Replace the backing collection and drop selections that no longer exist
    pub fn prune(&mut self, current: impl IntoIterator<Item = Id>) {
        let mut seen = HashSet::new();
        self.backing = current
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect();
        self.selected.retain(|id| seen.contains(id));
    }

    pub fn is_selected(&self, id: &Id) -> bool {
        self.selected.contains(id)
    }

    /// Non-empty and covering the whole backing collection
    pub fn all_selected(&self) -> bool {
        !self.selected.is_empty() && self.selected.len() == self.backing.len()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected ids in backing order
    pub fn selected_ids(&self) -> Vec<Id> {
        self.backing
            .iter()
            .filter(|id| self.selected.contains(*id))
            .cloned()
            .collect()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
