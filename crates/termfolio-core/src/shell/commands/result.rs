//! Command execution result type.

use crate::models::{OutputLine, VirtualPath};

/// Result of executing a command.
///
/// Commands produce output and may ask the session to change directory or
/// to clear the transcript; the session applies both.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    /// New working directory (e.g., for `cd`)
    pub navigate_to: Option<VirtualPath>,
    /// Empty the transcript instead of recording this command
    pub clear: bool,
}

impl CommandResult {
    /// Create a result with just output, no navigation.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            ..Self::default()
        }
    }

    /// Create a result that changes the working directory.
    pub fn navigate(path: VirtualPath) -> Self {
        Self {
            navigate_to: Some(path),
            ..Self::default()
        }
    }

    /// Create a result that clears the transcript.
    pub fn clear() -> Self {
        Self {
            clear: true,
            ..Self::default()
        }
    }

    /// Create an empty result (no output, no navigation).
    pub fn empty() -> Self {
        Self::default()
    }
}
