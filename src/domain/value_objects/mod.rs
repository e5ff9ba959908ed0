//! Domain Value Objects
//!
//! Immutable value types shared by the catalog tree and the session state.

use std::collections::BTreeSet;

mod category_id;
mod config_warning;
mod search_query;

pub use category_id::CategoryId;
pub use config_warning::ConfigWarning;
pub use search_query::SearchQuery;

/// Set of category ids, iterated in id order
pub type CategoryIdSet = BTreeSet<CategoryId>;
