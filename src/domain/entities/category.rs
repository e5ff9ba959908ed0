//! Category entity
//!
//! Two shapes of the same catalog node:
//! - `Category` is the nested form returned by the category listing, with
//!   children owned by their parent.
//! - `CategoryRecord` is the flat form (one row per category, linked through
//!   `parent_id`), used when the listing is not pre-nested.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CategoryId, SearchQuery};

/// A category node with its owned children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub parent_id: Option<CategoryId>,
    #[serde(default)]
    pub children: Vec<Category>,
    #[serde(default)]
    pub sort_order: i32,
}

impl Category {
    /// Create a root category without children
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            image_url: None,
            parent_id: None,
            children: Vec::new(),
            sort_order: 0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Append a child, linking its `parent_id` to this node
    pub fn with_child(mut self, child: Category) -> Self {
        self.add_child(child);
        self
    }

    /// Append a child, linking its `parent_id` to this node
    pub fn add_child(&mut self, mut child: Category) {
        child.parent_id = Some(self.id.clone());
        self.children.push(child);
    }

    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(category) = stack.pop() {
            count += 1;
            stack.extend(&category.children);
        }
        count
    }

    /// Returns true if the name (or, when enabled, the description) contains the query
    pub fn matches(&self, query: &SearchQuery, match_description: bool) -> bool {
        query.matches_entry(&self.name, self.description.as_deref(), match_description)
    }
}

// Flat listings can nest arbitrarily deep, so children are released from a
// work list instead of through recursive drop glue.
impl Drop for Category {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut child) = pending.pop() {
            pending.append(&mut child.children);
        }
    }
}

/// Total number of nodes in a forest
pub fn forest_node_count(forest: &[Category]) -> usize {
    forest.iter().map(Category::node_count).sum()
}

/// A category as a flat listing row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub parent_id: Option<CategoryId>,
    #[serde(default)]
    pub sort_order: i32,
}

impl CategoryRecord {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            image_url: None,
            parent_id: None,
            sort_order: 0,
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<CategoryId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn into_category(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
            description: self.description,
            image_url: self.image_url,
            parent_id: self.parent_id,
            children: Vec::new(),
            sort_order: self.sort_order,
        }
    }
}
