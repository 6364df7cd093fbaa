//! Errors reported by shell commands.
//!
//! Every failure is informational: the dispatcher renders it as an error
//! line and the session carries on.

use thiserror::Error;

/// A command failure, displayed verbatim to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// A path segment does not exist
    #[error("{cmd}: no such file or directory: {path}")]
    NotFound { cmd: &'static str, path: String },
    /// Expected a directory, found a file
    #[error("{cmd}: not a directory: {path}")]
    NotADirectory { cmd: &'static str, path: String },
    /// Expected a file, found a directory
    #[error("{cmd}: is a directory: {path}")]
    IsADirectory { cmd: &'static str, path: String },
    /// A required path argument was not given
    #[error("{cmd}: missing file operand")]
    MissingOperand { cmd: &'static str },
    /// An unsupported flag letter
    #[error("{cmd}: invalid option -- '{flag}'")]
    InvalidOption { cmd: &'static str, flag: char },
    /// The command name is not known, with an optional near match
    #[error("command not found: {name}. {}", hint(.suggestion))]
    UnknownCommand {
        name: String,
        suggestion: Option<&'static str>,
    },
}

fn hint(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(name) => format!("Did you mean '{}'?", name),
        None => "Type 'help' for available commands.".to_string(),
    }
}

impl ShellError {
    pub fn not_found(cmd: &'static str, path: impl Into<String>) -> Self {
        Self::NotFound {
            cmd,
            path: path.into(),
        }
    }

    pub fn not_a_directory(cmd: &'static str, path: impl Into<String>) -> Self {
        Self::NotADirectory {
            cmd,
            path: path.into(),
        }
    }

    pub fn is_a_directory(cmd: &'static str, path: impl Into<String>) -> Self {
        Self::IsADirectory {
            cmd,
            path: path.into(),
        }
    }
}
