//! Domain Ports (Interfaces)
//!
//! Boundaries between the picker and its host.

pub mod selection_sink;

pub use selection_sink::{NoopSelectionSink, SelectionSink};
