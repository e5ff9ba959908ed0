//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::error::PickerResult;

use super::loader::{self, ConfigWarning};

/// Separator used when joining ancestor names into a display path
pub const DEFAULT_PATH_SEPARATOR: &str = " > ";

/// Search behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Expand every kept node with a kept child when a search runs
    #[serde(default = "default_true")]
    pub auto_expand: bool,

    /// Match against descriptions as well as names
    #[serde(default = "default_true")]
    pub match_description: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            auto_expand: true,
            match_description: true,
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_path_separator")]
    pub path_separator: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            path_separator: default_path_separator(),
        }
    }
}

fn default_path_separator() -> String {
    DEFAULT_PATH_SEPARATOR.to_string()
}

/// Selection handling across tree refreshes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Drop selected ids that no longer exist after the tree is replaced
    #[serde(default = "default_true")]
    pub prune_stale_on_refresh: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            prune_stale_on_refresh: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PickerConfig {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub selection: SelectionConfig,
}

impl PickerConfig {
    /// Parse TOML text, collecting non-fatal warnings for unknown keys
    pub fn from_toml_str(content: &str) -> PickerResult<(Self, Vec<ConfigWarning>)> {
        loader::parse_with_warnings(content)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> PickerResult<String> {
        toml::to_string(self).map_err(|e| crate::error::PickerError::InvalidConfig {
            message: e.to_string(),
        })
    }
}
