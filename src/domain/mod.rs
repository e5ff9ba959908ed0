//! Domain Layer
//!
//! The catalog tree and the pure services that read it.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (CategoryId, SearchQuery)
//! - `entities/` - Category, CategoryRecord and the arena-backed CategoryTree
//! - `services/` - Flattener and SearchFilter
//! - `ports/` - SelectionSink, the outbound channel to the host
//!
//! ## Design Principles
//!
//! 1. **No I/O** - The host fetches categories and hands them in
//! 2. **Read-only tree** - Selection and expansion never live on nodes
//! 3. **Full-tree paths** - Paths and levels always come from the unfiltered tree

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
