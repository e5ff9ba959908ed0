//! Category tree entity
//!
//! Immutable snapshot of the category forest for one editing session.
//! Nodes live in an arena laid out in pre-order, so every subtree occupies a
//! contiguous range and a parent always sits at a smaller position than its
//! children. An `id -> position` map is built once at load time.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::entities::category::{Category, CategoryRecord};
use crate::domain::value_objects::{CategoryId, SearchQuery};
use crate::error::{PickerError, PickerResult};

/// A category as stored in the tree arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNode {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub parent_id: Option<CategoryId>,
    pub sort_order: i32,
    /// Depth from the root (root = 0)
    pub level: usize,
    pub(crate) position: usize,
    pub(crate) parent: Option<usize>,
    pub(crate) children: Vec<usize>,
    /// Exclusive end of this node's subtree range in the arena
    pub(crate) subtree_end: usize,
}

impl CategoryNode {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the name (or, when enabled, the description) contains the query
    pub fn matches(&self, query: &SearchQuery, match_description: bool) -> bool {
        query.matches_entry(&self.name, self.description.as_deref(), match_description)
    }

    /// Number of nodes below this one, at any depth
    pub fn descendant_count(&self) -> usize {
        self.subtree_end - self.position - 1
    }

    /// The node's own fields as a category with no children
    pub(crate) fn to_category(&self) -> Category {
        Category {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            parent_id: self.parent_id.clone(),
            children: Vec::new(),
            sort_order: self.sort_order,
        }
    }
}

/// Read-only category forest with O(1) id lookups
#[derive(Debug, Clone, Default)]
pub struct CategoryTree {
    forest: Vec<Category>,
    nodes: Vec<CategoryNode>,
    roots: Vec<usize>,
    index: HashMap<CategoryId, usize>,
}

impl CategoryTree {
    /// Tree with no categories
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from a nested listing.
    ///
    /// Children without a `parent_id` are linked to the node that contains
    /// them; a child that names a different parent is rejected, as is a
    /// top-level node that names any parent.
    pub fn from_forest(mut forest: Vec<Category>) -> PickerResult<Self> {
        for root in &mut forest {
            if let Some(parent_id) = &root.parent_id {
                return Err(PickerError::RootWithParent {
                    id: root.id.clone(),
                    parent_id: parent_id.clone(),
                });
            }
            adopt_children(root)?;
        }

        let mut tree = Self::default();
        let mut stack: Vec<(&Category, Option<usize>, usize)> =
            forest.iter().rev().map(|root| (root, None, 0)).collect();

        while let Some((category, parent, level)) = stack.pop() {
            let position = tree.nodes.len();
            // Owned children cannot loop, so a repeated id is a duplicate.
            if tree.index.insert(category.id.clone(), position).is_some() {
                return Err(PickerError::DuplicateId {
                    id: category.id.clone(),
                });
            }

            tree.nodes.push(CategoryNode {
                id: category.id.clone(),
                name: category.name.clone(),
                description: category.description.clone(),
                image_url: category.image_url.clone(),
                parent_id: category.parent_id.clone(),
                sort_order: category.sort_order,
                level,
                position,
                parent,
                children: Vec::new(),
                subtree_end: position + 1,
            });

            match parent {
                Some(parent) => tree.nodes[parent].children.push(position),
                None => tree.roots.push(position),
            }

            for child in category.children.iter().rev() {
                stack.push((child, Some(position), level + 1));
            }
        }

        for position in (0..tree.nodes.len()).rev() {
            if let Some(&last_child) = tree.nodes[position].children.last() {
                tree.nodes[position].subtree_end = tree.nodes[last_child].subtree_end;
            }
        }

        tree.forest = forest;
        debug!(
            nodes = tree.nodes.len(),
            roots = tree.roots.len(),
            "category tree loaded"
        );
        Ok(tree)
    }

    /// Build from a flat listing linked through `parent_id`.
    ///
    /// Siblings are ordered by `sort_order`; ties keep listing order.
    pub fn from_records(records: Vec<CategoryRecord>) -> PickerResult<Self> {
        let mut position_of: HashMap<CategoryId, usize> = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if position_of.insert(record.id.clone(), position).is_some() {
                return Err(PickerError::DuplicateId {
                    id: record.id.clone(),
                });
            }
        }

        let mut parent_of = Vec::with_capacity(records.len());
        for record in &records {
            let parent = match &record.parent_id {
                None => None,
                Some(parent_id) => Some(*position_of.get(parent_id).ok_or_else(|| {
                    PickerError::UnknownParent {
                        id: record.id.clone(),
                        parent_id: parent_id.clone(),
                    }
                })?),
            };
            parent_of.push(parent);
        }

        detect_cycles(&records, &parent_of)?;

        let mut children_of: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
        let mut roots = Vec::new();
        for (position, parent) in parent_of.iter().enumerate() {
            match parent {
                Some(parent) => children_of[*parent].push(position),
                None => roots.push(position),
            }
        }
        roots.sort_by_key(|&position| records[position].sort_order);
        for children in &mut children_of {
            children.sort_by_key(|&position| records[position].sort_order);
        }

        let categories = records.into_iter().map(CategoryRecord::into_category).collect();
        Self::from_forest(assemble(&roots, categories, &children_of))
    }

    /// Parse a nested JSON listing
    pub fn from_json(json: &str) -> PickerResult<Self> {
        let forest: Vec<Category> = serde_json::from_str(json)?;
        Self::from_forest(forest)
    }

    /// Parse a flat JSON listing
    pub fn from_records_json(json: &str) -> PickerResult<Self> {
        let records: Vec<CategoryRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// The nested forest this tree was built from
    pub fn forest(&self) -> &[Category] {
        &self.forest
    }

    /// All nodes in pre-order
    pub fn nodes(&self) -> &[CategoryNode] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> impl Iterator<Item = &CategoryNode> {
        self.roots.iter().map(move |&position| &self.nodes[position])
    }

    pub fn ids(&self) -> impl Iterator<Item = &CategoryId> {
        self.nodes.iter().map(|node| &node.id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&CategoryNode> {
        self.position_of(id).map(|position| &self.nodes[position])
    }

    pub fn level_of(&self, id: &str) -> Option<usize> {
        self.get(id).map(|node| node.level)
    }

    pub fn parent_of(&self, id: &str) -> Option<&CategoryNode> {
        self.get(id)?.parent.map(|parent| &self.nodes[parent])
    }

    /// Direct children in sibling order; empty for unknown ids
    pub fn children_of(&self, id: &str) -> impl Iterator<Item = &CategoryNode> {
        self.get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
            .iter()
            .map(move |&child| &self.nodes[child])
    }

    /// Ancestors ordered from the root down to the direct parent
    pub fn ancestors(&self, id: &str) -> Vec<&CategoryNode> {
        let Some(node) = self.get(id) else {
            return Vec::new();
        };
        let mut chain = Vec::with_capacity(node.level);
        let mut current = node.parent;
        // Parents precede children in the arena, so this walk always ends.
        while let Some(position) = current {
            let ancestor = &self.nodes[position];
            chain.push(ancestor);
            current = ancestor.parent;
        }
        chain.reverse();
        chain
    }

    /// Names from the root ancestor down to and including the node
    pub fn path_names(&self, id: &str) -> Option<Vec<String>> {
        let node = self.get(id)?;
        let mut names: Vec<String> = self
            .ancestors(id)
            .into_iter()
            .map(|ancestor| ancestor.name.clone())
            .collect();
        names.push(node.name.clone());
        Some(names)
    }

    pub fn display_path(&self, id: &str, separator: &str) -> Option<String> {
        self.path_names(id).map(|names| names.join(separator))
    }

    /// The node followed by all of its descendants, in pre-order
    pub fn subtree(&self, id: &str) -> &[CategoryNode] {
        match self.get(id) {
            Some(node) => &self.nodes[node.position..node.subtree_end],
            None => &[],
        }
    }

    /// All descendants of the node (excluding itself), in pre-order
    pub fn descendants(&self, id: &str) -> &[CategoryNode] {
        match self.get(id) {
            Some(node) => &self.nodes[node.position + 1..node.subtree_end],
            None => &[],
        }
    }

    pub fn descendant_ids(&self, id: &str) -> impl Iterator<Item = &CategoryId> {
        self.descendants(id).iter().map(|node| &node.id)
    }

    pub(crate) fn position_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }
}

fn adopt_children(root: &mut Category) -> PickerResult<()> {
    let mut stack = vec![root];
    while let Some(parent) = stack.pop() {
        let Category { id, children, .. } = parent;
        for child in children {
            match &child.parent_id {
                None => child.parent_id = Some(id.clone()),
                Some(declared) if *declared != *id => {
                    return Err(PickerError::ParentMismatch {
                        id: child.id.clone(),
                        declared: declared.clone(),
                        actual: id.clone(),
                    });
                }
                Some(_) => {}
            }
            stack.push(child);
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Walk every `parent_id` chain with a visited set and fail on the first loop.
fn detect_cycles(records: &[CategoryRecord], parent_of: &[Option<usize>]) -> PickerResult<()> {
    let mut marks = vec![Mark::Unvisited; records.len()];

    for start in 0..records.len() {
        if marks[start] != Mark::Unvisited {
            continue;
        }

        let mut chain: Vec<usize> = Vec::new();
        let mut current = Some(start);
        while let Some(position) = current {
            match marks[position] {
                Mark::Done => break,
                Mark::InProgress => {
                    let loop_start = chain.iter().position(|&p| p == position).unwrap_or(0);
                    let mut ids: Vec<CategoryId> = chain[loop_start..]
                        .iter()
                        .map(|&p| records[p].id.clone())
                        .collect();
                    ids.push(records[position].id.clone());
                    warn!(id = %records[position].id, length = ids.len() - 1, "category cycle");
                    return Err(PickerError::Cycle {
                        id: records[position].id.clone(),
                        chain: ids,
                    });
                }
                Mark::Unvisited => {
                    marks[position] = Mark::InProgress;
                    chain.push(position);
                    current = parent_of[position];
                }
            }
        }

        for position in chain {
            marks[position] = Mark::Done;
        }
    }

    Ok(())
}

/// Nest flat categories under their parents without recursing per level
fn assemble(
    roots: &[usize],
    categories: Vec<Category>,
    children_of: &[Vec<usize>],
) -> Vec<Category> {
    let mut order = Vec::with_capacity(categories.len());
    let mut stack: Vec<usize> = roots.iter().rev().copied().collect();
    while let Some(position) = stack.pop() {
        order.push(position);
        stack.extend(children_of[position].iter().rev());
    }

    // Children follow their parent in `order`, so a reverse walk finishes
    // every child before its parent takes it.
    let mut slots: Vec<Option<Category>> = categories.into_iter().map(Some).collect();
    for &position in order.iter().rev() {
        let children: Vec<Category> = children_of[position]
            .iter()
            .filter_map(|&child| slots[child].take())
            .collect();
        if let Some(category) = slots[position].as_mut() {
            category.children = children;
        }
    }

    roots.iter().filter_map(|&root| slots[root].take()).collect()
}
