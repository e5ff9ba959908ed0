//! Random category forests.

use proptest::prelude::*;
use proptest::sample::Index;

use category_picker::{CategoryId, CategoryIdSet, CategoryRecord, CategoryTree};

/// Flat listings that always form a valid forest.
///
/// Record `i` may only point at an earlier record, so there are no cycles.
/// Names and descriptions come from a tiny alphabet so queries hit often.
pub fn arb_records(max_nodes: usize) -> impl Strategy<Value = Vec<CategoryRecord>> {
    prop::collection::vec(
        (
            any::<Option<Index>>(),
            "[a-d]{1,4}",
            prop::option::of("[a-d ]{0,6}"),
            -3i32..3,
        ),
        0..max_nodes,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (parent, name, description, sort_order))| {
                let mut record = CategoryRecord::new(format!("n{i}"), name).with_sort_order(sort_order);
                if let Some(parent) = parent.filter(|_| i > 0) {
                    record = record.with_parent(format!("n{}", parent.index(i)));
                }
                if let Some(description) = description {
                    record = record.with_description(description);
                }
                record
            })
            .collect()
    })
}

pub fn arb_tree() -> impl Strategy<Value = CategoryTree> {
    arb_records(40).prop_map(|records| {
        CategoryTree::from_records(records).expect("generated records form a forest")
    })
}

/// Queries over the same alphabet, sometimes blank or padded
pub fn arb_query() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ \t]{1,3}",
        "[a-d]{1,2}",
        " ?[A-D]{1,2} ?",
    ]
}

/// Pick ids of `tree` by index; empty for an empty tree
pub fn pick_ids(tree: &CategoryTree, picks: &[Index]) -> CategoryIdSet {
    let ids: Vec<&CategoryId> = tree.ids().collect();
    if ids.is_empty() {
        return CategoryIdSet::new();
    }
    picks.iter().map(|pick| pick.get(&ids)).map(|id| (*id).clone()).collect()
}
