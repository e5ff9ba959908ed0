//! Picker session
//!
//! Owns everything that changes while a product form is open: the tree
//! snapshot, the search inputs, selection and expansion. Discrete actions
//! go through [`PickerSession::apply`]; derived views are memoized on the
//! inputs they actually depend on, so expansion changes never re-run the
//! search filter.

mod action;

pub use action::PickerAction;

use std::borrow::Cow;

use tracing::{debug, warn};

use crate::config::PickerConfig;
use crate::domain::entities::{Category, CategoryTree};
use crate::domain::ports::{NoopSelectionSink, SelectionSink};
use crate::domain::services::{FilteredView, FlattenedNode, Flattener, SearchFilter};
use crate::domain::value_objects::{CategoryId, SearchQuery};

use super::expansion::ExpansionManager;
use super::memo::Memo;
use super::selection::SelectionManager;

/// Inputs the filtered view depends on
#[derive(Debug, Clone, PartialEq, Eq)]
struct FilterKey {
    generation: u64,
    needle: String,
    selected_only: bool,
    /// Only tracked while `selected_only` narrows a non-blank search
    selection_revision: Option<u64>,
}

/// State of one category picker
pub struct PickerSession<S: SelectionSink = NoopSelectionSink> {
    tree: CategoryTree,
    generation: u64,
    config: PickerConfig,
    query: SearchQuery,
    selected_only: bool,
    selection: SelectionManager,
    expansion: ExpansionManager,
    filter_memo: Memo<FilterKey, FilteredView>,
    flatten_memo: Memo<FilterKey, Vec<FlattenedNode>>,
    /// Search the last auto-expand ran for, without the selection revision
    auto_expanded_for: Option<FilterKey>,
    sink: S,
}

impl PickerSession {
    /// Session with an empty selection and no listener
    pub fn new(tree: CategoryTree, config: PickerConfig) -> Self {
        Self {
            tree,
            generation: 0,
            config,
            query: SearchQuery::default(),
            selected_only: false,
            selection: SelectionManager::new(),
            expansion: ExpansionManager::new(),
            filter_memo: Memo::new(),
            flatten_memo: Memo::new(),
            auto_expanded_for: None,
            sink: NoopSelectionSink,
        }
    }
}

impl<S: SelectionSink> PickerSession<S> {
    /// Attach the listener that receives every selection change
    pub fn with_sink<T: SelectionSink>(self, sink: T) -> PickerSession<T> {
        PickerSession {
            tree: self.tree,
            generation: self.generation,
            config: self.config,
            query: self.query,
            selected_only: self.selected_only,
            selection: self.selection,
            expansion: self.expansion,
            filter_memo: self.filter_memo,
            flatten_memo: self.flatten_memo,
            auto_expanded_for: self.auto_expanded_for,
            sink,
        }
    }

    /// Seed the selection from the product's current assignment.
    ///
    /// Seeding is not a change, so the sink is not notified.
    pub fn with_selection<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<CategoryId>,
    {
        self.selection = SelectionManager::with_selected(ids);
        self
    }

    pub fn tree(&self) -> &CategoryTree {
        &self.tree
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn selected_only(&self) -> bool {
        self.selected_only
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn expansion(&self) -> &ExpansionManager {
        &self.expansion
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Bumped every time the tree is replaced
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// How many times the search filter actually ran
    pub fn filter_runs(&self) -> usize {
        self.filter_memo.computations()
    }

    /// How many times the visible nodes were actually flattened
    pub fn flatten_runs(&self) -> usize {
        self.flatten_memo.computations()
    }

    /// Apply one user action. Returns whether any state changed.
    pub fn apply(&mut self, action: PickerAction) -> bool {
        let name = action.name();
        let touches_selection = action.touches_selection();
        let tree = &self.tree;

        let changed = match action {
            PickerAction::Toggle(id) => self.selection.toggle(tree, id.as_str()),
            PickerAction::SelectSubtree(id) => self.selection.select_subtree(tree, id.as_str()),
            PickerAction::DeselectSubtree(id) => {
                self.selection.deselect_subtree(tree, id.as_str())
            }
            PickerAction::SelectAll => self.selection.select_all(tree),
            PickerAction::ClearAll => self.selection.clear_all(),
            PickerAction::Expand(id) => self.expansion.expand(tree, id.as_str()),
            PickerAction::Collapse(id) => self.expansion.collapse(id.as_str()),
            PickerAction::ToggleExpansion(id) => {
                self.expansion.toggle_expansion(tree, id.as_str())
            }
            PickerAction::ExpandAll => self.expansion.expand_all(tree),
            PickerAction::CollapseAll => self.expansion.collapse_all(),
            PickerAction::SetQuery(raw) => {
                let query = SearchQuery::new(raw);
                let changed = query != self.query;
                self.query = query;
                changed
            }
            PickerAction::SetSelectedOnly(enabled) => {
                let changed = enabled != self.selected_only;
                self.selected_only = enabled;
                changed
            }
        };

        debug!(action = name, changed, "picker action applied");
        if changed && touches_selection {
            self.notify();
        }
        changed
    }

    /// Swap in a refetched tree.
    ///
    /// Cached views are keyed on the generation and recompute on next use.
    /// Selected ids the new tree does not know are removed when
    /// `prune_stale_on_refresh` is set, and returned. Expansion always
    /// forgets vanished branches.
    pub fn replace_tree(&mut self, tree: CategoryTree) -> Vec<CategoryId> {
        self.tree = tree;
        self.generation += 1;

        let dropped = if self.config.selection.prune_stale_on_refresh {
            self.selection.retain_known(&self.tree)
        } else {
            Vec::new()
        };
        let collapsed = self.expansion.retain_known(&self.tree);

        debug!(
            generation = self.generation,
            nodes = self.tree.node_count(),
            collapsed,
            "category tree replaced"
        );
        if !dropped.is_empty() {
            warn!(count = dropped.len(), "dropped stale category selections after refresh");
            self.notify();
        }
        dropped
    }

    /// Result of the current search over the tree
    pub fn filtered_view(&mut self) -> &FilteredView {
        self.snapshot().view
    }

    /// The pruned forest; borrows the original forest while the query is blank
    pub fn filtered_forest(&mut self) -> Cow<'_, [Category]> {
        let snapshot = self.snapshot();
        snapshot.view.to_forest(snapshot.tree)
    }

    /// Visible nodes in pre-order with levels and full-tree paths
    pub fn visible_nodes(&mut self) -> &[FlattenedNode] {
        self.snapshot().visible
    }

    /// Bring the cached views up to date and borrow the whole state.
    ///
    /// Auto-expand runs once per search (tree generation, needle and
    /// selected-only), so a branch the user collapses during a search stays
    /// collapsed, even when selection changes re-run a selected-only filter.
    pub fn snapshot(&mut self) -> SessionSnapshot<'_> {
        let key = self.filter_key();
        let filter = SearchFilter::new(&self.tree)
            .with_description_matching(self.config.search.match_description);

        let (view, fresh) = self.filter_memo.get_or_compute(key.clone(), || {
            filter.apply(&self.query, self.selected_only, self.selection.selected())
        });
        if !fresh {
            debug!("search filter served from cache");
        } else {
            let search = FilterKey {
                selection_revision: None,
                ..key.clone()
            };
            if self.auto_expanded_for.as_ref() != Some(&search) {
                if self.config.search.auto_expand {
                    let targets = view.expansion_targets(&self.tree);
                    if self.expansion.extend(targets) {
                        debug!(expanded = self.expansion.len(), "auto-expanded search matches");
                    }
                }
                self.auto_expanded_for = Some(search);
            }
        }

        let flattener = Flattener::new(&self.tree);
        let (visible, fresh) = self
            .flatten_memo
            .get_or_compute(key, || flattener.flatten_filtered(view));
        if fresh {
            debug!(visible = visible.len(), "visible nodes flattened");
        }

        SessionSnapshot {
            tree: &self.tree,
            config: &self.config,
            query: &self.query,
            view,
            visible,
            selection: &self.selection,
            expansion: &self.expansion,
        }
    }

    fn filter_key(&self) -> FilterKey {
        let narrowing = self.selected_only && !self.query.is_blank();
        FilterKey {
            generation: self.generation,
            needle: self.query.needle().to_string(),
            selected_only: narrowing,
            selection_revision: narrowing.then_some(self.selection.revision()),
        }
    }

    fn notify(&mut self) {
        let selected = self.selection.to_vec();
        self.sink.selection_changed(&selected);
    }
}

/// Borrowed, up-to-date view of a session
#[derive(Debug, Clone, Copy)]
pub struct SessionSnapshot<'a> {
    pub tree: &'a CategoryTree,
    pub config: &'a PickerConfig,
    pub query: &'a SearchQuery,
    pub view: &'a FilteredView,
    /// Nodes that survive the search, in pre-order
    pub visible: &'a [FlattenedNode],
    pub selection: &'a SelectionManager,
    pub expansion: &'a ExpansionManager,
}
