//! Discrete user actions understood by a picker session

use crate::domain::value_objects::CategoryId;

/// One user intent, applied through [`super::PickerSession::apply`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    /// Flip a single category's selection
    Toggle(CategoryId),
    /// Select a category and everything below it
    SelectSubtree(CategoryId),
    /// Deselect a category and everything below it
    DeselectSubtree(CategoryId),
    /// Select every category in the tree
    SelectAll,
    /// Empty the selection
    ClearAll,
    /// Open a branch
    Expand(CategoryId),
    /// Close a branch
    Collapse(CategoryId),
    /// Open a closed branch or close an open one
    ToggleExpansion(CategoryId),
    /// Open every branch
    ExpandAll,
    /// Close every branch
    CollapseAll,
    /// Replace the search text
    SetQuery(String),
    /// Restrict search hits to selected categories
    SetSelectedOnly(bool),
}

impl PickerAction {
    /// Whether this action mutates the selection
    pub fn touches_selection(&self) -> bool {
        matches!(
            self,
            PickerAction::Toggle(_)
                | PickerAction::SelectSubtree(_)
                | PickerAction::DeselectSubtree(_)
                | PickerAction::SelectAll
                | PickerAction::ClearAll
        )
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            PickerAction::Toggle(_) => "toggle",
            PickerAction::SelectSubtree(_) => "select_subtree",
            PickerAction::DeselectSubtree(_) => "deselect_subtree",
            PickerAction::SelectAll => "select_all",
            PickerAction::ClearAll => "clear_all",
            PickerAction::Expand(_) => "expand",
            PickerAction::Collapse(_) => "collapse",
            PickerAction::ToggleExpansion(_) => "toggle_expansion",
            PickerAction::ExpandAll => "expand_all",
            PickerAction::CollapseAll => "collapse_all",
            PickerAction::SetQuery(_) => "set_query",
            PickerAction::SetSelectedOnly(_) => "set_selected_only",
        }
    }
}
