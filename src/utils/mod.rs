//! Browser helpers.
//!
//! Provides:
//! - [`console_log`] - `log` records forwarded to the browser console
//! - [`dom`] - Focus and time helpers

pub mod console_log;
pub mod dom;
