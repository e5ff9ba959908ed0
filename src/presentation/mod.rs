//! Presentation Layer
//!
//! Turns picker state into view models for the host's renderer. Nothing in
//! this layer draws; it only shapes data.
//!
//! ## Structure
//!
//! - `presenter` - Per-row view models, session summaries and a text outline

pub mod presenter;

pub use presenter::{
    CategoryRow, LevelBuckets, Presenter, SelectedEntries, SelectedEntry, SelectionSummary,
};
