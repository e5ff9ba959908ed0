//! Domain Services
//!
//! Pure services over a `CategoryTree`. They borrow the tree, never mutate
//! it, and have no I/O.

mod flattener;
mod search_filter;

pub use flattener::{FlattenedNode, Flattener};
pub use search_filter::{filter, FilteredView, SearchFilter};
