//! Reusable category fixtures.

use category_picker::{Category, CategoryId, CategoryTree, SelectionSink};

/// Nested listing as returned by the catalog service.
///
/// Ten categories over three levels.
pub const CATALOG_JSON: &str = r#"[
  {
    "id": "apparel",
    "name": "Apparel",
    "children": [
      {
        "id": "shoes",
        "name": "Shoes",
        "description": "Footwear for every season",
        "children": [
          { "id": "sneakers", "name": "Sneakers", "description": "Canvas and leather" },
          { "id": "boots", "name": "Boots" }
        ]
      },
      { "id": "hats", "name": "Hats" }
    ]
  },
  {
    "id": "electronics",
    "name": "Electronics",
    "children": [
      {
        "id": "audio",
        "name": "Audio",
        "children": [
          { "id": "headphones", "name": "Headphones", "image_url": "https://cdn.example.com/hp.png" },
          { "id": "speakers", "name": "Speakers" }
        ]
      },
      { "id": "cameras", "name": "Cameras" }
    ]
  }
]"#;

/// Flat listing with numeric ids, linked through `parent_id`.
pub const FLAT_CATALOG_JSON: &str = r#"[
  { "id": 3, "name": "Boots", "parent_id": 2, "sort_order": 2 },
  { "id": 1, "name": "Apparel", "parent_id": null },
  { "id": 4, "name": "Sneakers", "parent_id": 2, "sort_order": 1 },
  { "id": 2, "name": "Shoes", "parent_id": 1 }
]"#;

/// A -> [B, C], B -> [D]; names equal ids
pub fn abcd_tree() -> CategoryTree {
    CategoryTree::from_forest(vec![Category::new("A", "A")
        .with_child(Category::new("B", "B").with_child(Category::new("D", "D")))
        .with_child(Category::new("C", "C"))])
    .expect("fixture tree is valid")
}

pub fn catalog_tree() -> CategoryTree {
    CategoryTree::from_json(CATALOG_JSON).expect("fixture catalog is valid")
}

pub fn ids(raw: &[&str]) -> Vec<CategoryId> {
    raw.iter().copied().map(CategoryId::from).collect()
}

/// Sink that keeps every update it receives
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub updates: Vec<Vec<CategoryId>>,
}

impl RecordingSink {
    pub fn last(&self) -> Option<&[CategoryId]> {
        self.updates.last().map(Vec::as_slice)
    }
}

impl SelectionSink for RecordingSink {
    fn selection_changed(&mut self, selected: &[CategoryId]) {
        self.updates.push(selected.to_vec());
    }
}
