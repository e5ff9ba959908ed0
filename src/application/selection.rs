//! Selection manager
//!
//! Owns the set of category ids assigned to the product. Every mutator
//! reports whether the set actually changed; ids that are not in the tree
//! are ignored rather than rejected.

use tracing::debug;

use crate::domain::entities::CategoryTree;
use crate::domain::value_objects::{CategoryId, CategoryIdSet};

/// Selected category ids plus a revision that moves on every change
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionManager {
    selected: CategoryIdSet,
    revision: u64,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from an existing assignment.
    ///
    /// Ids are kept as given, even if the tree does not know them yet; see
    /// [`SelectionManager::retain_known`].
    pub fn with_selected<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<CategoryId>,
    {
        Self {
            selected: ids.into_iter().map(Into::into).collect(),
            revision: 0,
        }
    }

    pub fn selected(&self) -> &CategoryIdSet {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Bumped once per mutation that changed the set
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Snapshot of the selection, in id order
    pub fn to_vec(&self) -> Vec<CategoryId> {
        self.selected.iter().cloned().collect()
    }

    /// Flip membership of a single id. Unknown ids are a no-op.
    pub fn toggle(&mut self, tree: &CategoryTree, id: &str) -> bool {
        let Some(node) = tree.get(id) else {
            debug!(id, "toggle ignored for unknown category");
            return false;
        };
        if !self.selected.remove(id) {
            self.selected.insert(node.id.clone());
        }
        self.bump()
    }

    /// Select every category in the tree
    pub fn select_all(&mut self, tree: &CategoryTree) -> bool {
        let before = self.selected.len();
        self.selected.extend(tree.ids().cloned());
        self.bump_if(self.selected.len() != before)
    }

    /// Empty the selection, including ids the tree does not know
    pub fn clear_all(&mut self) -> bool {
        if self.selected.is_empty() {
            return false;
        }
        self.selected.clear();
        self.bump()
    }

    /// Add the node and all of its descendants
    pub fn select_subtree(&mut self, tree: &CategoryTree, id: &str) -> bool {
        let mut changed = false;
        for node in tree.subtree(id) {
            changed |= self.selected.insert(node.id.clone());
        }
        self.bump_if(changed)
    }

    /// Remove the node and all of its descendants
    pub fn deselect_subtree(&mut self, tree: &CategoryTree, id: &str) -> bool {
        let mut changed = false;
        for node in tree.subtree(id) {
            changed |= self.selected.remove(&node.id);
        }
        self.bump_if(changed)
    }

    /// Selected nodes strictly below `id`; 0 for unknown ids
    pub fn count_selected_descendants(&self, tree: &CategoryTree, id: &str) -> usize {
        tree.descendant_ids(id)
            .filter(|descendant| self.selected.contains(*descendant))
            .count()
    }

    /// All nodes strictly below `id`; 0 for unknown ids
    pub fn count_descendants(&self, tree: &CategoryTree, id: &str) -> usize {
        tree.get(id).map_or(0, |node| node.descendant_count())
    }

    /// Drop ids the tree does not contain and return them
    pub fn retain_known(&mut self, tree: &CategoryTree) -> Vec<CategoryId> {
        let (kept, stale): (CategoryIdSet, CategoryIdSet) = std::mem::take(&mut self.selected)
            .into_iter()
            .partition(|id| tree.contains(id.as_str()));
        self.selected = kept;
        self.bump_if(!stale.is_empty());
        stale.into_iter().collect()
    }

    /// Selected ids the tree does not contain
    pub fn stale_ids<'a>(&'a self, tree: &'a CategoryTree) -> impl Iterator<Item = &'a CategoryId> {
        self.selected
            .iter()
            .filter(move |id| !tree.contains(id.as_str()))
    }

    fn bump(&mut self) -> bool {
        self.revision += 1;
        true
    }

    fn bump_if(&mut self, changed: bool) -> bool {
        if changed {
            self.bump();
        }
        changed
    }
}
