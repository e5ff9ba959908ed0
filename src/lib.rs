//! Category Picker - hierarchical category selection engine
//!
//! Keeps a read-only forest of product categories for one editing session
//! and layers on top of it live search that preserves ancestor paths,
//! point and subtree selection, branch expansion, and the per-row counts a
//! picker UI shows. The host fetches categories, renders rows and stores
//! the resulting selection; everything in between lives here.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    ExpansionManager, PickerAction, PickerSession, SelectionManager, SessionSnapshot,
};
pub use config::{ConfigWarning, PickerConfig};
pub use domain::entities::{Category, CategoryNode, CategoryRecord, CategoryTree};
pub use domain::ports::{NoopSelectionSink, SelectionSink};
pub use domain::services::{filter, FilteredView, FlattenedNode, Flattener, SearchFilter};
pub use domain::value_objects::{CategoryId, CategoryIdSet, SearchQuery};
pub use error::{PickerError, PickerResult};
pub use presentation::{CategoryRow, Presenter, SelectedEntries, SelectionSummary};
