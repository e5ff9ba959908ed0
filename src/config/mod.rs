//! Configuration module for the category picker
//!
//! The host hands in TOML text (typically embedded in its own settings).
//! Every field is optional; missing sections fall back to built-in
//! defaults. Unknown keys produce warnings, never errors.

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use types::{DisplayConfig, PickerConfig, SearchConfig, SelectionConfig, DEFAULT_PATH_SEPARATOR};
