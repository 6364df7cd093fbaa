//! Command history with an Up/Down recall cursor.

/// Outcome of moving the recall cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recall {
    /// Replace the input with this entry.
    Entry(String),
    /// Cursor moved past either end; the input should be emptied.
    Cleared,
    /// Nothing to do.
    Unchanged,
}

/// Submitted command lines, oldest first.
///
/// The cursor is `None` while the user is editing a fresh line and
/// `Some(i)` while entry `i` is recalled. Recall never mutates the list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and reset the cursor.
    ///
    /// Blank lines and repeats of the last entry are not recorded.
    pub fn push(&mut self, line: &str) {
        let line = line.trim();
        if !line.is_empty() && self.entries.last().map(String::as_str) != Some(line) {
            self.entries.push(line.to_string());
        }
        self.cursor = None;
    }

    /// Step back to an older entry (Up).
    pub fn recall_previous(&mut self) -> Recall {
        if self.entries.is_empty() {
            return Recall::Unchanged;
        }

        match self.cursor {
            None => self.select(self.entries.len() - 1),
            Some(0) => {
                self.cursor = None;
                Recall::Cleared
            }
            Some(i) => self.select(i - 1),
        }
    }

    /// Step forward to a newer entry (Down).
    pub fn recall_next(&mut self) -> Recall {
        match self.cursor {
            None => Recall::Unchanged,
            Some(i) if i + 1 < self.entries.len() => self.select(i + 1),
            Some(_) => {
                self.cursor = None;
                Recall::Cleared
            }
        }
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn select(&mut self, index: usize) -> Recall {
        self.cursor = Some(index);
        Recall::Entry(self.entries[index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(lines: &[&str]) -> CommandHistory {
        let mut history = CommandHistory::new();
        for line in lines {
            history.push(line);
        }
        history
    }

    #[test]
    fn test_push_skips_blank_and_repeats() {
        let history = history(&["ls", "  ", "ls", "cd ..", "ls"]);
        assert_eq!(history.entries(), ["ls", "cd ..", "ls"]);
    }

    #[test]
    fn test_recall_walks_back_then_clears() {
        let mut history = history(&["a", "b", "c"]);

        assert_eq!(history.recall_previous(), Recall::Entry("c".into()));
        assert_eq!(history.recall_previous(), Recall::Entry("b".into()));
        assert_eq!(history.recall_previous(), Recall::Entry("a".into()));
        assert_eq!(history.cursor(), Some(0));

        // Up at the oldest entry moves past the start
        assert_eq!(history.recall_previous(), Recall::Cleared);
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn test_recall_forward() {
        let mut history = history(&["a", "b"]);
        history.recall_previous();
        history.recall_previous();

        assert_eq!(history.recall_next(), Recall::Entry("b".into()));
        assert_eq!(history.recall_next(), Recall::Cleared);
        assert_eq!(history.recall_next(), Recall::Unchanged);
    }

    #[test]
    fn test_recall_on_empty_history() {
        let mut history = CommandHistory::new();
        assert_eq!(history.recall_previous(), Recall::Unchanged);
        assert_eq!(history.recall_next(), Recall::Unchanged);
    }

    #[test]
    fn test_push_resets_cursor_and_recall_never_mutates() {
        let mut history = history(&["a", "b"]);
        history.recall_previous();
        history.recall_previous();
        assert_eq!(history.entries(), ["a", "b"]);

        history.push("c");
        assert_eq!(history.cursor(), None);
        assert_eq!(history.recall_previous(), Recall::Entry("c".into()));
    }
}
