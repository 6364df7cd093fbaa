//! Shell core: filesystem, command parsing/execution and line editing.
//!
//! This module is the portfolio terminal without any front end:
//! - [`VirtualFs`] - Read-only in-memory filesystem
//! - [`Command`], [`dispatch`] - Parsing and execution of input lines
//! - [`autocomplete`] - Tab completion
//! - [`CommandHistory`] - Up/Down recall
//! - [`Session`] - All of the above wired into one state machine

mod autocomplete;
mod commands;
mod error;
mod filesystem;
mod history;
mod levenshtein;
mod session;

pub use autocomplete::{AutocompleteResult, autocomplete};
pub use commands::{Command, CommandResult, PathArg, dispatch, execute_command};
pub use error::ShellError;
pub use filesystem::{VirtualFs, portfolio_fs};
pub use history::{CommandHistory, Recall};
pub use levenshtein::{edit_distance, suggest_command};
pub use session::{Session, TranscriptEntry};
