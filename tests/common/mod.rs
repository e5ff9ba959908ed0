//! Common test utilities for property and scenario tests.
//!
//! This module provides:
//! - Fixtures: reusable category trees and listings
//! - `RecordingSink`: captures every selection update
//! - Assertion macros: `assert_selection!`, `assert_visible!`

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
