//! Core of the termfolio portfolio terminal.
//!
//! A simulated shell over a small read-only filesystem: path resolution,
//! `cd`/`ls`/`cat`, a handful of static commands, tab completion, history
//! recall and typo suggestions. Front ends (the web app and the CLI) drive a
//! [`Session`] and render the [`OutputLine`]s it produces.

pub mod config;
pub mod models;
pub mod shell;
pub mod utils;

pub use models::{OutputLine, OutputLineData, VirtualPath};
pub use shell::{AutocompleteResult, Session, ShellError, TranscriptEntry, VirtualFs, portfolio_fs};
