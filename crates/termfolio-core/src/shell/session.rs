//! One terminal session: working directory, input line, history and transcript.
//!
//! Front ends own a `Session` and feed it key events; everything they render
//! comes back out of it.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;

use crate::config::{MAX_TRANSCRIPT_ENTRIES, START_PATH};
use crate::models::{OutputLine, VirtualPath, prompt_for};
use crate::shell::commands::{Command, PathArg, dispatch, execute_command};
use crate::shell::error::ShellError;
use crate::shell::{AutocompleteResult, CommandHistory, Recall, VirtualFs, autocomplete};
use crate::utils::BoundedLog;

static TRANSCRIPT_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A submitted command together with what it printed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TranscriptEntry {
    /// Unique id, used as a render key.
    #[serde(skip)]
    pub id: usize,
    pub command: String,
    pub output: Vec<OutputLine>,
    /// Working directory at submission, shown in the entry's prompt.
    pub cwd: VirtualPath,
}

impl TranscriptEntry {
    fn new(command: String, output: Vec<OutputLine>, cwd: VirtualPath) -> Self {
        Self {
            id: TRANSCRIPT_COUNTER.fetch_add(1, Ordering::Relaxed),
            command,
            output,
            cwd,
        }
    }

    /// Prompt as it was when the command was submitted.
    pub fn prompt(&self) -> String {
        prompt_for(&self.cwd)
    }
}

/// Interactive shell state.
#[derive(Clone, Debug)]
pub struct Session {
    cwd: VirtualPath,
    input: String,
    history: CommandHistory,
    transcript: BoundedLog<TranscriptEntry>,
}

impl Session {
    /// New session in the start directory.
    pub fn new() -> Self {
        Self::with_cwd(VirtualPath::parse(START_PATH))
    }

    fn with_cwd(cwd: VirtualPath) -> Self {
        Self {
            cwd,
            input: String::new(),
            history: CommandHistory::new(),
            transcript: BoundedLog::new(MAX_TRANSCRIPT_ENTRIES),
        }
    }

    /// New session whose working directory is `path`, resolved from home.
    ///
    /// Fails the same way `cd path` would.
    pub fn starting_at(path: &str, fs: &VirtualFs) -> Result<Self, ShellError> {
        let home = VirtualPath::home();
        let result = execute_command(Command::Cd(Some(PathArg::new(path))), &home, fs)?;
        Ok(Self::with_cwd(result.navigate_to.unwrap_or(home)))
    }

    pub fn cwd(&self) -> &VirtualPath {
        &self.cwd
    }

    /// Current prompt, e.g. `root@localhost:~/Desktop`.
    pub fn prompt(&self) -> String {
        prompt_for(&self.cwd)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn transcript(&self) -> &BoundedLog<TranscriptEntry> {
        &self.transcript
    }

    /// Replace the input after a manual edit; leaves history recall.
    pub fn edit(&mut self, buffer: impl Into<String>) {
        self.input = buffer.into();
        self.history.reset_cursor();
    }

    /// Up arrow.
    pub fn recall_previous(&mut self) {
        let recall = self.history.recall_previous();
        self.apply_recall(recall);
    }

    /// Down arrow.
    pub fn recall_next(&mut self) {
        let recall = self.history.recall_next();
        self.apply_recall(recall);
    }

    fn apply_recall(&mut self, recall: Recall) {
        match recall {
            Recall::Entry(line) => self.input = line,
            Recall::Cleared => self.input.clear(),
            Recall::Unchanged => {}
        }
    }

    /// Tab. A single match replaces the input; the result is returned so
    /// callers can show multiple candidates.
    pub fn complete(&mut self, fs: &VirtualFs) -> AutocompleteResult {
        let result = autocomplete(&self.input, &self.cwd, fs);
        if let AutocompleteResult::Single(completed) = &result {
            self.input.clone_from(completed);
        }
        result
    }

    /// Empty the transcript, as `clear` does.
    pub fn clear(&mut self) {
        self.transcript.clear();
    }

    /// Enter. Runs the input line and empties it.
    ///
    /// Returns the recorded entry, or `None` when nothing was recorded
    /// (blank line or `clear`).
    pub fn submit(&mut self, fs: &VirtualFs) -> Option<&TranscriptEntry> {
        let command = self.input.trim().to_string();
        self.input.clear();
        if command.is_empty() {
            self.history.reset_cursor();
            return None;
        }

        self.history.push(&command);
        let submitted_in = self.cwd.clone();
        let result = dispatch(&command, &submitted_in, fs);

        if let Some(target) = result.navigate_to {
            debug_assert!(fs.is_directory(&target));
            self.cwd = target;
        }

        if result.clear {
            self.clear();
            return None;
        }

        self.transcript
            .push(TranscriptEntry::new(command, result.output, submitted_in));
        self.transcript.last()
    }

    /// Submit `line` as if it had been typed.
    pub fn run(&mut self, line: &str, fs: &VirtualFs) -> Option<&TranscriptEntry> {
        self.edit(line);
        self.submit(fs)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
