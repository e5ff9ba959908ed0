//! Configuration warning value object.

use std::fmt;

/// Non-fatal configuration warning handed back to the host.
///
/// Raised for keys the picker does not recognise. The configuration still
/// loads; the key is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Full dotted path of the unknown key (e.g. `search.auto_expnad`)
    pub key: String,
    /// The line number (1-indexed) if available
    pub line: Option<usize>,
    /// A suggested correction if available
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}'", self.key)?;
        if let Some(line) = self.line {
            write!(f, " at line {line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}
