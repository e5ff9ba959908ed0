//! Scenario: Loading the catalog listing
//!
//! Journey: The host receives the category listing either nested or flat
//! and hands it to the picker.
//!
//! Success Criteria:
//! - Both shapes produce the same kind of tree
//! - Structural problems fail fast with a descriptive error

use category_picker::{CategoryRecord, CategoryTree, Flattener, PickerError};

use crate::common::*;

/// SCENARIO: nested listing with optional fields
#[test]
fn scenario_nested_listing() {
    let tree = CategoryTree::from_json(CATALOG_JSON).unwrap();

    assert_eq!(tree.node_count(), 10);
    assert_eq!(tree.roots().count(), 2);
    assert_eq!(
        tree.get("headphones").and_then(|node| node.image_url.as_deref()),
        Some("https://cdn.example.com/hp.png")
    );
    assert_eq!(
        tree.display_path("speakers", " > ").as_deref(),
        Some("Electronics > Audio > Speakers")
    );
    assert_eq!(tree.parent_of("shoes").map(|node| node.id.as_str()), Some("apparel"));
}

/// SCENARIO: flat listing with numeric ids, out of order
#[test]
fn scenario_flat_listing() {
    let tree = CategoryTree::from_records_json(FLAT_CATALOG_JSON).unwrap();
    let names: Vec<String> = Flattener::new(&tree)
        .flatten_tree()
        .iter()
        .map(|node| format!("{}{}", "  ".repeat(node.level), node.name()))
        .collect();

    assert_eq!(names, vec!["Apparel", "  Shoes", "    Sneakers", "    Boots"]);
    assert_eq!(tree.level_of("4"), Some(2));
}

/// SCENARIO: a parent loop in a flat listing
#[test]
fn scenario_flat_listing_with_cycle() {
    let records = vec![
        CategoryRecord::new("root", "Root"),
        CategoryRecord::new("a", "A").with_parent("c"),
        CategoryRecord::new("b", "B").with_parent("a"),
        CategoryRecord::new("c", "C").with_parent("b"),
    ];

    let err = CategoryTree::from_records(records).unwrap_err();
    assert!(matches!(err, PickerError::Cycle { .. }));
    assert!(err.to_string().starts_with("category cycle detected at 'a'"));
}

/// SCENARIO: malformed listings
#[test]
fn scenario_malformed_listings() {
    assert!(matches!(
        CategoryTree::from_json("{\"id\": 1}"),
        Err(PickerError::InvalidJson(_))
    ));
    assert!(matches!(
        CategoryTree::from_json(r#"[{"id": 1, "name": "A"}, {"id": 1, "name": "B"}]"#),
        Err(PickerError::DuplicateId { .. })
    ));
    assert!(matches!(
        CategoryTree::from_records_json(r#"[{"id": 2, "name": "B", "parent_id": 9}]"#),
        Err(PickerError::UnknownParent { .. })
    ));
    assert!(CategoryTree::from_json("[]").unwrap().is_empty());
}
