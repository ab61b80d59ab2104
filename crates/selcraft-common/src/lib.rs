//! Common utilities for the Selcraft toolkit.
//!
//! This crate provides shared infrastructure used by the selector library and its front ends:
//! - **Warning System** - colored, deduplicated terminal output for questionable input

pub mod warning;

pub use warning::{clear_warnings, has_warned, set_quiet, warn_once};
