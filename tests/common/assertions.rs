//! Custom assertion macros for scenario tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

use category_picker::{PickerSession, SelectionSink};

/// Selected ids of a session, in id order
pub fn selected_ids<S: SelectionSink>(session: &PickerSession<S>) -> Vec<String> {
    session
        .selection()
        .selected()
        .iter()
        .map(|id| id.to_string())
        .collect()
}

/// Visible (post-search) ids of a session, in pre-order
pub fn visible_ids<S: SelectionSink>(session: &mut PickerSession<S>) -> Vec<String> {
    session
        .visible_nodes()
        .iter()
        .map(|node| node.id.to_string())
        .collect()
}

/// Assert the exact selection of a session.
///
/// # Example
/// ```ignore
/// assert_selection!(session, ["A", "C"]);
/// ```
#[macro_export]
macro_rules! assert_selection {
    ($session:expr, [$($id:expr),* $(,)?]) => {
        let expected: Vec<String> = vec![$($id.to_string()),*];
        let actual = $crate::common::selected_ids(&$session);
        assert_eq!(
            actual, expected,
            "Selection mismatch.\nExpected: {:?}\nActual:   {:?}",
            expected, actual
        );
    };
}

/// Assert the visible ids of a session, in pre-order.
///
/// # Example
/// ```ignore
/// assert_visible!(session, ["A", "B", "D"]);
/// ```
#[macro_export]
macro_rules! assert_visible {
    ($session:expr, [$($id:expr),* $(,)?]) => {
        let expected: Vec<String> = vec![$($id.to_string()),*];
        let actual = $crate::common::visible_ids(&mut $session);
        assert_eq!(
            actual, expected,
            "Visible nodes mismatch for query {:?}.\nExpected: {:?}\nActual:   {:?}",
            $session.query().raw(), expected, actual
        );
    };
}
