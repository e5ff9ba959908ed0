//! Selection Sink Port
//!
//! The host form learns about selection changes through this port. It always
//! receives the complete selection, never a delta.

use crate::domain::value_objects::CategoryId;

/// Trait for receiving selection updates
///
/// Implementations can be:
/// - a closure writing into the product form state
/// - NoopSelectionSink: headless use and tests that only read the session
pub trait SelectionSink {
    /// Called once after every mutation that changed the selection
    fn selection_changed(&mut self, selected: &[CategoryId]);
}

/// No-op sink for sessions without a listener
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSelectionSink;

impl SelectionSink for NoopSelectionSink {
    fn selection_changed(&mut self, _selected: &[CategoryId]) {
        // Do nothing
    }
}

impl<F> SelectionSink for F
where
    F: FnMut(&[CategoryId]),
{
    fn selection_changed(&mut self, selected: &[CategoryId]) {
        self(selected)
    }
}
