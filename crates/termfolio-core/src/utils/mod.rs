//! Small data structures shared by the shell.
//!
//! Provides:
//! - [`BoundedLog`] - Fixed-capacity log that drops its oldest entries

mod bounded_log;

pub use bounded_log::BoundedLog;
