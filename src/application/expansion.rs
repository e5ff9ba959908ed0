//! Expansion manager
//!
//! Tracks which branches are open in the picker. Independent of selection;
//! only nodes with children can be expanded.

use crate::domain::entities::CategoryTree;
use crate::domain::value_objects::{CategoryId, CategoryIdSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionManager {
    expanded: CategoryIdSet,
}

impl ExpansionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expanded(&self) -> &CategoryIdSet {
        &self.expanded
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Open a branch. Leaves and unknown ids are ignored.
    pub fn expand(&mut self, tree: &CategoryTree, id: &str) -> bool {
        match tree.get(id) {
            Some(node) if node.has_children() => self.expanded.insert(node.id.clone()),
            _ => false,
        }
    }

    pub fn collapse(&mut self, id: &str) -> bool {
        self.expanded.remove(id)
    }

    pub fn toggle_expansion(&mut self, tree: &CategoryTree, id: &str) -> bool {
        if self.is_expanded(id) {
            self.collapse(id)
        } else {
            self.expand(tree, id)
        }
    }

    /// Open every node that has at least one child
    pub fn expand_all(&mut self, tree: &CategoryTree) -> bool {
        let before = self.expanded.len();
        self.expanded.extend(
            tree.nodes()
                .iter()
                .filter(|node| node.has_children())
                .map(|node| node.id.clone()),
        );
        self.expanded.len() != before
    }

    pub fn collapse_all(&mut self) -> bool {
        let changed = !self.expanded.is_empty();
        self.expanded.clear();
        changed
    }

    /// Add ids without removing any (used by search auto-expand)
    pub fn extend(&mut self, ids: impl IntoIterator<Item = CategoryId>) -> bool {
        let before = self.expanded.len();
        self.expanded.extend(ids);
        self.expanded.len() != before
    }

    /// Forget ids that are no longer branches of `tree`; returns how many
    pub fn retain_known(&mut self, tree: &CategoryTree) -> usize {
        let before = self.expanded.len();
        self.expanded
            .retain(|id| tree.get(id.as_str()).is_some_and(|node| node.has_children()));
        before - self.expanded.len()
    }
}
