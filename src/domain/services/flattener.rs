//! Flattener
//!
//! Pre-order, level-annotated view of the category forest. Paths and levels
//! of known nodes are always resolved against the full tree, also when the
//! forest being flattened is a pruned search result.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::entities::{Category, CategoryNode, CategoryTree};
use crate::domain::value_objects::CategoryId;
use crate::error::{PickerError, PickerResult};

use super::search_filter::FilteredView;

/// A flattened representation of a category for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlattenedNode {
    pub id: CategoryId,
    /// Depth level (0 = root)
    pub level: usize,
    /// Names from the root ancestor down to this node
    pub path: Vec<String>,
    /// Ids of the direct children present in the flattened forest
    pub children: Vec<CategoryId>,
}

impl FlattenedNode {
    pub fn name(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Flattens forests and subtrees of one category tree
#[derive(Debug, Clone, Copy)]
pub struct Flattener<'a> {
    tree: &'a CategoryTree,
}

impl<'a> Flattener<'a> {
    pub fn new(tree: &'a CategoryTree) -> Self {
        Self { tree }
    }

    /// Every node of the tree, in pre-order
    pub fn flatten_tree(&self) -> Vec<FlattenedNode> {
        self.tree
            .nodes()
            .iter()
            .map(|node| self.flatten_node(node))
            .collect()
    }

    /// The node and its descendants, in pre-order; empty for unknown ids
    pub fn flatten_subtree(&self, id: &str) -> Vec<FlattenedNode> {
        self.tree
            .subtree(id)
            .iter()
            .map(|node| self.flatten_node(node))
            .collect()
    }

    /// The nodes a search keeps, in pre-order.
    ///
    /// Same result as flattening the pruned forest, read straight from the
    /// arena. Child lists only name kept children.
    pub fn flatten_filtered(&self, view: &FilteredView) -> Vec<FlattenedNode> {
        if view.is_unfiltered() {
            return self.flatten_tree();
        }
        self.tree
            .nodes()
            .iter()
            .filter(|node| view.kept_at(node.position))
            .map(|node| {
                let mut flattened = self.flatten_node(node);
                flattened
                    .children
                    .retain(|child| view.is_kept(self.tree, child.as_str()));
                flattened
            })
            .collect()
    }

    /// Flatten a nested forest, such as a pruned search result.
    ///
    /// Sibling order follows `children`. Nodes that are not part of the tree
    /// get their path and level from the traversal itself. A category id seen
    /// twice is a structural error.
    pub fn flatten(&self, forest: &[Category]) -> PickerResult<Vec<FlattenedNode>> {
        let mut flattened = Vec::new();
        let mut visited: HashSet<&CategoryId> = HashSet::new();
        let mut stack: Vec<(&Category, usize, Vec<String>)> = forest
            .iter()
            .rev()
            .map(|root| (root, 0, Vec::new()))
            .collect();

        while let Some((category, traversal_level, parent_path)) = stack.pop() {
            if !visited.insert(&category.id) {
                return Err(PickerError::DuplicateId {
                    id: category.id.clone(),
                });
            }

            let (level, path) = match self.tree.get(category.id.as_str()) {
                Some(node) => (
                    node.level,
                    self.tree.path_names(category.id.as_str()).unwrap_or_default(),
                ),
                None => {
                    let mut path = parent_path;
                    path.push(category.name.clone());
                    (traversal_level, path)
                }
            };

            for child in category.children.iter().rev() {
                stack.push((child, level + 1, path.clone()));
            }

            flattened.push(FlattenedNode {
                id: category.id.clone(),
                level,
                path,
                children: category.children.iter().map(|c| c.id.clone()).collect(),
            });
        }

        Ok(flattened)
    }

    fn flatten_node(&self, node: &CategoryNode) -> FlattenedNode {
        FlattenedNode {
            id: node.id.clone(),
            level: node.level,
            path: self.tree.path_names(node.id.as_str()).unwrap_or_default(),
            children: self
                .tree
                .children_of(node.id.as_str())
                .map(|child| child.id.clone())
                .collect(),
        }
    }
}
