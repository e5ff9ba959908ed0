//! Search filter
//!
//! Prunes the category tree to the nodes that match a query, plus every
//! ancestor of a match so the path to each hit stays visible.

use std::borrow::Cow;

use tracing::debug;

use crate::domain::entities::{Category, CategoryTree};
use crate::domain::value_objects::{CategoryId, CategoryIdSet, SearchQuery};

/// Outcome of running the search filter over a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilteredView {
    /// Blank query: nothing is pruned and the original forest is used as-is
    Unfiltered,
    /// Keep flags indexed by arena position
    Pruned { kept: Vec<bool>, kept_count: usize },
}

impl FilteredView {
    pub fn is_unfiltered(&self) -> bool {
        matches!(self, FilteredView::Unfiltered)
    }

    pub fn is_kept(&self, tree: &CategoryTree, id: &str) -> bool {
        match self {
            FilteredView::Unfiltered => tree.contains(id),
            FilteredView::Pruned { .. } => tree
                .position_of(id)
                .is_some_and(|position| self.kept_at(position)),
        }
    }

    /// Number of nodes that survive the filter
    pub fn kept_count(&self, tree: &CategoryTree) -> usize {
        match self {
            FilteredView::Unfiltered => tree.node_count(),
            FilteredView::Pruned { kept_count, .. } => *kept_count,
        }
    }

    /// True when nothing survives (no categories, or no matches)
    pub fn is_empty(&self, tree: &CategoryTree) -> bool {
        self.kept_count(tree) == 0
    }

    /// Kept ids in pre-order
    pub fn kept_ids<'t>(&self, tree: &'t CategoryTree) -> Vec<&'t CategoryId> {
        tree.nodes()
            .iter()
            .filter(|node| self.kept_at(node.position))
            .map(|node| &node.id)
            .collect()
    }

    /// The pruned forest. A blank query borrows the tree's own forest.
    pub fn to_forest<'t>(&self, tree: &'t CategoryTree) -> Cow<'t, [Category]> {
        match self {
            FilteredView::Unfiltered => Cow::Borrowed(tree.forest()),
            FilteredView::Pruned { .. } => Cow::Owned(self.prune(tree)),
        }
    }

    /// Kept nodes that have at least one kept child.
    ///
    /// These are the ids auto-expand adds so every match is reachable. An
    /// unfiltered view has no targets.
    pub fn expansion_targets(&self, tree: &CategoryTree) -> Vec<CategoryId> {
        if self.is_unfiltered() {
            return Vec::new();
        }
        tree.nodes()
            .iter()
            .filter(|node| self.kept_at(node.position))
            .filter(|node| node.children.iter().any(|&child| self.kept_at(child)))
            .map(|node| node.id.clone())
            .collect()
    }

    /// Keep flag for an arena position. Positions past the view (a view
    /// computed for a smaller tree) count as pruned.
    pub(crate) fn kept_at(&self, position: usize) -> bool {
        match self {
            FilteredView::Unfiltered => true,
            FilteredView::Pruned { kept, .. } => kept.get(position).copied().unwrap_or(false),
        }
    }

    /// Rebuild the kept nodes as a nested forest, children before parents
    fn prune(&self, tree: &CategoryTree) -> Vec<Category> {
        let nodes = tree.nodes();
        let mut built: Vec<Option<Category>> = nodes.iter().map(|_| None).collect();

        for node in nodes.iter().rev() {
            if !self.kept_at(node.position) {
                continue;
            }
            let mut category = node.to_category();
            category.children = node
                .children
                .iter()
                .filter_map(|&child| built[child].take())
                .collect();
            built[node.position] = Some(category);
        }

        tree.roots()
            .filter_map(|root| built[root.position].take())
            .collect()
    }
}

/// Query-driven pruning over one category tree
#[derive(Debug, Clone, Copy)]
pub struct SearchFilter<'a> {
    tree: &'a CategoryTree,
    match_description: bool,
}

impl<'a> SearchFilter<'a> {
    pub fn new(tree: &'a CategoryTree) -> Self {
        Self {
            tree,
            match_description: true,
        }
    }

    /// Whether descriptions are searched in addition to names
    pub fn with_description_matching(mut self, enabled: bool) -> Self {
        self.match_description = enabled;
        self
    }

    /// Evaluate the keep rule bottom-up.
    ///
    /// A node is kept if it matches (and, with `selected_only`, is selected)
    /// or if any descendant is kept. A blank query keeps everything.
    pub fn apply(
        &self,
        query: &SearchQuery,
        selected_only: bool,
        selection: &CategoryIdSet,
    ) -> FilteredView {
        if query.is_blank() {
            return FilteredView::Unfiltered;
        }

        let nodes = self.tree.nodes();
        let mut kept = vec![false; nodes.len()];
        let mut has_kept_child = vec![false; nodes.len()];
        let mut kept_count = 0;

        // Children sit after their parent in the arena, so a reverse sweep
        // sees every child before its parent.
        for node in nodes.iter().rev() {
            let hit = node.matches(query, self.match_description)
                && (!selected_only || selection.contains(&node.id));
            if hit || has_kept_child[node.position] {
                kept[node.position] = true;
                kept_count += 1;
                if let Some(parent) = node.parent {
                    has_kept_child[parent] = true;
                }
            }
        }

        debug!(
            query = %query,
            selected_only,
            kept = kept_count,
            total = nodes.len(),
            "search filter applied"
        );
        FilteredView::Pruned { kept, kept_count }
    }
}

/// Prune `tree` for `query` and return the surviving forest
pub fn filter<'t>(
    tree: &'t CategoryTree,
    query: &SearchQuery,
    selected_only: bool,
    selection: &CategoryIdSet,
) -> Cow<'t, [Category]> {
    SearchFilter::new(tree)
        .apply(query, selected_only, selection)
        .to_forest(tree)
}
