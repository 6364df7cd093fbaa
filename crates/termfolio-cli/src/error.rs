//! Errors that end a CLI run.

use std::io;

use termfolio_core::ShellError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode transcript: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid --cwd: {0}")]
    Cwd(#[from] ShellError),
}
