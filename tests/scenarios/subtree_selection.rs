//! Scenario: Bulk selection on a small tree
//!
//! Journey: A merchant assigns a product to a whole branch, then trims it.
//!
//! Tree: A -> [B, C], B -> [D]

use category_picker::{PickerAction, PickerConfig, PickerSession, Presenter};

use crate::common::*;
use crate::{assert_selection, assert_visible};

fn session() -> PickerSession<RecordingSink> {
    PickerSession::new(abcd_tree(), PickerConfig::default()).with_sink(RecordingSink::default())
}

/// SCENARIO: select a subtree, then deselect part of it
#[test]
fn scenario_select_then_trim_subtree() {
    let mut session = session();

    // Step 1: select everything under A
    assert!(session.apply(PickerAction::SelectSubtree("A".into())));
    assert_selection!(session, ["A", "B", "C", "D"]);

    // Step 2: drop the B branch
    assert!(session.apply(PickerAction::DeselectSubtree("B".into())));
    assert_selection!(session, ["A", "C"]);

    // The host saw the full selection after each step.
    assert_eq!(session.sink().updates.len(), 2);
    assert_eq!(session.sink().last(), Some(ids(&["A", "C"]).as_slice()));
}

/// SCENARIO: searching for a leaf keeps its ancestor chain
#[test]
fn scenario_search_leaf_keeps_ancestors() {
    let mut session = session();
    session.apply(PickerAction::SetQuery("D".into()));
    assert_visible!(session, ["A", "B", "D"]);

    let forest = session.filtered_forest();
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].children.len(), 1);
}

/// SCENARIO: select all and clear all on a ten-node catalog
#[test]
fn scenario_select_all_then_clear_all() {
    let mut session =
        PickerSession::new(catalog_tree(), PickerConfig::default()).with_sink(RecordingSink::default());
    assert_eq!(session.tree().node_count(), 10);

    session.apply(PickerAction::SelectAll);
    assert_eq!(session.selection().len(), 10);
    let summary = Presenter::for_session(&mut session).summary();
    assert_eq!(summary.selected_count, 10);
    assert_eq!(summary.total_count, 10);

    session.apply(PickerAction::ClearAll);
    assert_eq!(session.selection().len(), 0);
    assert_eq!(session.sink().updates.len(), 2);
    assert_eq!(session.sink().last(), Some(&[][..]));
}

/// SCENARIO: a search with no hits shows nothing
#[test]
fn scenario_search_without_matches() {
    let mut session = session();
    session.apply(PickerAction::SetQuery("zzz-no-match".into()));

    assert!(session.filtered_forest().is_empty());
    assert_visible!(session, []);
}

/// SCENARIO: toggling a stale id changes nothing
#[test]
fn scenario_stale_toggle_is_ignored() {
    let mut session = session();
    assert!(!session.apply(PickerAction::Toggle("retired".into())));
    assert_selection!(session, []);
    assert!(session.sink().updates.is_empty());
}
