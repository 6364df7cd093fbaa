//! UI components built with Leptos.
//!
//! - [`titlebar`] - Window title and decoration dots
//! - [`terminal`] - Terminal emulator interface
//! - [`status`] - Footer with version, owner and machine name

pub mod status;
pub mod terminal;
pub mod titlebar;
