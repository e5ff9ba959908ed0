//! Scenario: Finding a category by search
//!
//! Journey: A merchant types part of a description, picks the hit, clears
//! the search and then reviews only what is assigned.
//!
//! Success Criteria:
//! - Ancestors of every hit stay visible and are expanded once
//! - Expansion changes never re-run the search
//! - Paths and counts always describe the full catalog

use category_picker::{PickerAction, PickerConfig, PickerSession, Presenter};

use crate::assert_visible;
use crate::common::*;

/// SCENARIO: search, select, clear, narrow to selected
#[test]
fn scenario_search_select_and_review() {
    let mut session = PickerSession::new(catalog_tree(), PickerConfig::default())
        .with_sink(RecordingSink::default());

    // Step 1: nothing expanded yet
    insta::assert_snapshot!(Presenter::for_session(&mut session).outline(), @r"
    + [ ] Apparel (0/4)
    + [ ] Electronics (0/4)
    ");

    // Step 2: a description hit pulls in its ancestors and opens them
    session.apply(PickerAction::SetQuery("Leather".into()));
    assert_visible!(session, ["apparel", "shoes", "sneakers"]);
    insta::assert_snapshot!(Presenter::for_session(&mut session).outline(), @r"
    - [ ] Apparel (0/4)
      - [ ] Shoes (0/2)
          [ ] Sneakers
    ");
    let runs = session.filter_runs();

    // Step 3: pick the hit and fold its branch; the search does not re-run
    session.apply(PickerAction::Toggle("sneakers".into()));
    session.apply(PickerAction::Collapse("shoes".into()));
    insta::assert_snapshot!(Presenter::for_session(&mut session).outline(), @r"
    - [ ] Apparel (1/4)
      + [ ] Shoes (1/2)
    ");
    assert_eq!(session.filter_runs(), runs);

    // Step 4: clearing the search shows the whole catalog again
    session.apply(PickerAction::SetQuery(String::new()));
    assert_eq!(session.visible_nodes().len(), 10);
    insta::assert_snapshot!(Presenter::for_session(&mut session).outline(), @r"
    - [ ] Apparel (1/4)
      + [ ] Shoes (1/2)
        [ ] Hats
    + [ ] Electronics (0/4)
    ");

    // Step 5: review only assigned categories that mention "s"
    session.apply(PickerAction::SetSelectedOnly(true));
    session.apply(PickerAction::SetQuery("s".into()));
    assert_visible!(session, ["apparel", "shoes", "sneakers"]);
    assert!(session.expansion().is_expanded("shoes"));

    let chosen = Presenter::for_session(&mut session).selected_entries();
    assert_eq!(chosen.entries.len(), 1);
    assert_eq!(chosen.entries[0].display_path, "Apparel > Shoes > Sneakers");
    assert_eq!(session.sink().last(), Some(ids(&["sneakers"]).as_slice()));
}

/// SCENARIO: description matching switched off in config
#[test]
fn scenario_name_only_search() {
    let (config, warnings) = PickerConfig::from_toml_str(
        r#"
[search]
match_description = false

[display]
path_separator = " / "
"#,
    )
    .unwrap();
    assert!(warnings.is_empty());

    let mut session = PickerSession::new(catalog_tree(), config);
    session.apply(PickerAction::SetQuery("leather".into()));
    assert_visible!(session, []);

    session.apply(PickerAction::SetQuery("phones".into()));
    assert_visible!(session, ["electronics", "audio", "headphones"]);

    let rows = session_rows(&mut session);
    assert_eq!(rows[2], "Electronics / Audio / Headphones");
}

/// SCENARIO: summary while a search is active
#[test]
fn scenario_summary_during_search() {
    let mut session = PickerSession::new(catalog_tree(), PickerConfig::default())
        .with_selection(["apparel", "audio", "speakers", "discontinued"]);
    session.apply(PickerAction::SetQuery("camera".into()));

    let summary = Presenter::for_session(&mut session).summary();
    assert_eq!(summary.total_count, 10);
    assert_eq!(summary.visible_count, 2);
    assert_eq!(summary.selected_count, 3);
    assert_eq!(summary.stale_count, 1);
    assert_eq!(summary.selected_by_level.roots, ids(&["apparel"]));
    assert_eq!(summary.selected_by_level.second_level, ids(&["audio"]));
    assert_eq!(summary.selected_by_level.deeper, ids(&["speakers"]));
}

fn session_rows<S: category_picker::SelectionSink>(session: &mut PickerSession<S>) -> Vec<String> {
    Presenter::for_session(session)
        .rows()
        .into_iter()
        .map(|row| row.display_path)
        .collect()
}
