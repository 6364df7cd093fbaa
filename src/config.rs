//! Web front end configuration.
//!
//! Shell-level constants (prompt, paths, texts) live in
//! [`termfolio_core::config`]; this module only holds presentation settings.

pub use termfolio_core::config::{APP_VERSION, MACHINE_NAME, OWNER_NAME, WELCOME_TEXT};

/// Title shown in the window's title bar.
pub const WINDOW_TITLE: &str = "Charlie Beutter";

/// Delay between characters of the typed welcome line.
pub const TYPE_DELAY_MS: u32 = 15;
