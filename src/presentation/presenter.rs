//! Category presenter
//!
//! Combines the visible (post-search) nodes with selection and expansion
//! into per-row view models and session summaries. Holds only borrows and
//! keeps no state between calls.

use std::fmt::Write as _;

use serde::Serialize;

use crate::application::{ExpansionManager, PickerSession, SelectionManager};
use crate::config::DEFAULT_PATH_SEPARATOR;
use crate::domain::entities::CategoryTree;
use crate::domain::ports::SelectionSink;
use crate::domain::services::FlattenedNode;
use crate::domain::value_objects::CategoryId;

/// View model for one visible category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    pub id: CategoryId,
    pub name: String,
    pub level: usize,
    /// Ancestor names joined with the configured separator
    pub display_path: String,
    pub is_selected: bool,
    pub is_expanded: bool,
    /// Whether the row has children in the current (possibly filtered) view
    pub has_children: bool,
    pub selected_descendant_count: usize,
    pub total_descendant_count: usize,
}

/// Selected ids grouped by depth
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LevelBuckets {
    /// Level 0
    pub roots: Vec<CategoryId>,
    /// Level 1
    pub second_level: Vec<CategoryId>,
    /// Level 2 and below
    pub deeper: Vec<CategoryId>,
}

impl LevelBuckets {
    pub fn total(&self) -> usize {
        self.roots.len() + self.second_level.len() + self.deeper.len()
    }

    fn push(&mut self, level: usize, id: CategoryId) {
        match level {
            0 => self.roots.push(id),
            1 => self.second_level.push(id),
            _ => self.deeper.push(id),
        }
    }
}

/// Session-wide counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionSummary {
    /// Nodes in the unfiltered tree
    pub total_count: usize,
    /// Nodes that survive the current search
    pub visible_count: usize,
    /// Selected ids that resolve to a node in the tree
    pub selected_count: usize,
    /// Selected ids the tree does not know
    pub stale_count: usize,
    pub selected_by_level: LevelBuckets,
}

/// A selected category resolved for display (e.g. as a chip)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedEntry {
    pub id: CategoryId,
    pub name: String,
    pub display_path: String,
    pub level: usize,
}

/// Selected categories split into resolvable entries and stale ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectedEntries {
    pub entries: Vec<SelectedEntry>,
    pub stale: Vec<CategoryId>,
}

/// Outline markers
const EXPANDED: &str = "-";
const COLLAPSED: &str = "+";
const LEAF: &str = " ";
const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

/// Read-only view over one picker state
#[derive(Debug, Clone, Copy)]
pub struct Presenter<'a> {
    tree: &'a CategoryTree,
    visible: &'a [FlattenedNode],
    selection: &'a SelectionManager,
    expansion: &'a ExpansionManager,
    separator: &'a str,
}

impl<'a> Presenter<'a> {
    pub fn new(
        tree: &'a CategoryTree,
        visible: &'a [FlattenedNode],
        selection: &'a SelectionManager,
        expansion: &'a ExpansionManager,
    ) -> Self {
        Self {
            tree,
            visible,
            selection,
            expansion,
            separator: DEFAULT_PATH_SEPARATOR,
        }
    }

    /// Presenter over a session's current state, using its configured separator
    pub fn for_session<S: SelectionSink>(session: &'a mut PickerSession<S>) -> Self {
        let snapshot = session.snapshot();
        Self::new(
            snapshot.tree,
            snapshot.visible,
            snapshot.selection,
            snapshot.expansion,
        )
        .with_separator(&snapshot.config.display.path_separator)
    }

    pub fn with_separator(mut self, separator: &'a str) -> Self {
        self.separator = separator;
        self
    }

    /// One row per visible node, in pre-order
    pub fn rows(&self) -> Vec<CategoryRow> {
        self.visible.iter().map(|node| self.row(node)).collect()
    }

    /// Rows actually on screen: descendants of collapsed rows are skipped
    pub fn displayed_rows(&self) -> Vec<CategoryRow> {
        let mut rows = Vec::new();
        let mut collapsed_at: Option<usize> = None;

        for node in self.visible {
            if let Some(level) = collapsed_at {
                if node.level > level {
                    continue;
                }
                collapsed_at = None;
            }

            let row = self.row(node);
            if row.has_children && !row.is_expanded {
                collapsed_at = Some(row.level);
            }
            rows.push(row);
        }

        rows
    }

    pub fn summary(&self) -> SelectionSummary {
        let mut selected_by_level = LevelBuckets::default();
        let mut stale_count = 0;

        for id in self.selection.selected() {
            match self.tree.level_of(id.as_str()) {
                Some(level) => selected_by_level.push(level, id.clone()),
                None => stale_count += 1,
            }
        }

        SelectionSummary {
            total_count: self.tree.node_count(),
            visible_count: self.visible.len(),
            selected_count: selected_by_level.total(),
            stale_count,
            selected_by_level,
        }
    }

    /// Every selected id, resolved against the full tree
    pub fn selected_entries(&self) -> SelectedEntries {
        let mut resolved = SelectedEntries::default();

        for id in self.selection.selected() {
            match self.tree.get(id.as_str()) {
                Some(node) => resolved.entries.push(SelectedEntry {
                    id: id.clone(),
                    name: node.name.clone(),
                    display_path: self
                        .tree
                        .display_path(id.as_str(), self.separator)
                        .unwrap_or_default(),
                    level: node.level,
                }),
                None => resolved.stale.push(id.clone()),
            }
        }

        resolved
    }

    /// Plain-text dump of the displayed rows, one per line
    pub fn outline(&self) -> String {
        self.displayed_rows()
            .iter()
            .map(outline_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn row(&self, node: &FlattenedNode) -> CategoryRow {
        let id = node.id.as_str();
        CategoryRow {
            id: node.id.clone(),
            name: node.name().to_string(),
            level: node.level,
            display_path: node.path.join(self.separator),
            is_selected: self.selection.is_selected(id),
            is_expanded: self.expansion.is_expanded(id),
            has_children: node.has_children(),
            selected_descendant_count: self.selection.count_selected_descendants(self.tree, id),
            total_descendant_count: self.selection.count_descendants(self.tree, id),
        }
    }
}

fn outline_line(row: &CategoryRow) -> String {
    let branch = match (row.has_children, row.is_expanded) {
        (false, _) => LEAF,
        (true, true) => EXPANDED,
        (true, false) => COLLAPSED,
    };
    let check = if row.is_selected { CHECKED } else { UNCHECKED };
    let mut line = format!(
        "{:indent$}{branch} {check} {}",
        "",
        row.name,
        indent = row.level * 2
    );
    if row.total_descendant_count > 0 {
        let _ = write!(
            line,
            " ({}/{})",
            row.selected_descendant_count, row.total_descendant_count
        );
    }
    line
}
