//! Domain Entities
//!
//! - `Category` / `CategoryRecord` - a catalog node in nested or flat form
//! - `CategoryTree` - the arena-backed, read-only forest for one session

mod category;
mod category_tree;

pub use category::{forest_node_count, Category, CategoryRecord};
pub use category_tree::{CategoryNode, CategoryTree};
