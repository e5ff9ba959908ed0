//! Application Layer
//!
//! Stateful pieces of a picker session.
//! This layer:
//! - Depends on the Domain layer (tree, services, ports)
//! - Owns the mutable state (selection, expansion, search inputs)
//! - Memoizes derived views on the inputs they depend on
//!
//! ## Components
//!
//! - `SelectionManager` - Selected ids, point and subtree toggles, counts
//! - `ExpansionManager` - Expanded ids, expand/collapse and auto-expand
//! - `PickerSession` - Reducer over `PickerAction`, cached filter/flatten
//! - `Memo` - Single-entry cache used by the session

pub mod expansion;
pub mod memo;
pub mod selection;
pub mod session;

pub use expansion::ExpansionManager;
pub use memo::Memo;
pub use selection::SelectionManager;
pub use session::{PickerAction, PickerSession, SessionSnapshot};
