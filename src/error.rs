//! Error types for the category picker
//!
//! Only structural problems in the supplied catalog are errors. Stale ids,
//! empty trees and searches without matches are ordinary states and never
//! surface here.

use thiserror::Error;

use crate::domain::value_objects::CategoryId;

/// Result type alias for picker operations
pub type PickerResult<T> = Result<T, PickerError>;

/// Main error type for picker operations
#[derive(Error, Debug)]
pub enum PickerError {
    /// `parent_id` links form a loop
    #[error("category cycle detected at '{id}' (chain: {})", format_chain(.chain))]
    Cycle { id: CategoryId, chain: Vec<CategoryId> },

    /// Two categories share the same id
    #[error("duplicate category id '{id}'")]
    DuplicateId { id: CategoryId },

    /// A flat record references a parent that is not in the listing
    #[error("category '{id}' references unknown parent '{parent_id}'")]
    UnknownParent {
        id: CategoryId,
        parent_id: CategoryId,
    },

    /// A nested child declares a different parent than the node containing it
    #[error("category '{id}' declares parent '{declared}' but is nested under '{actual}'")]
    ParentMismatch {
        id: CategoryId,
        declared: CategoryId,
        actual: CategoryId,
    },

    /// A top-level node of a nested listing claims to have a parent
    #[error("category '{id}' is listed as a root but declares parent '{parent_id}'")]
    RootWithParent {
        id: CategoryId,
        parent_id: CategoryId,
    },

    /// Category listing is not valid JSON for the expected shape
    #[error("invalid category JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Picker configuration could not be parsed
    #[error("invalid picker configuration: {message}")]
    InvalidConfig { message: String },
}

fn format_chain(chain: &[CategoryId]) -> String {
    chain
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(" -> ")
}
