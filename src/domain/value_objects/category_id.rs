//! Category Id Value Object
//!
//! Stable identifier of a category. Listings from the catalog service carry
//! ids either as strings or as integers; both normalize to the same textual
//! form so lookups never depend on how the id was encoded.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Category identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryIdDe {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match CategoryIdDe::deserialize(deserializer)? {
            CategoryIdDe::Text(text) => Self(text),
            CategoryIdDe::Signed(n) => Self(n.to_string()),
            CategoryIdDe::Unsigned(n) => Self(n.to_string()),
        })
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CategoryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u64> for CategoryId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl Borrow<str> for CategoryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
