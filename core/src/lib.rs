//! Thread-safe shared containers.
//!
//! A [`SharedCell`] owns a value behind one mutex and two condition variables,
//! hands out reference-counted handles, and exposes the value's capabilities as
//! blocking and non-blocking operations.

pub mod cell;

pub use cell::{CellGuard, SharedCell};
