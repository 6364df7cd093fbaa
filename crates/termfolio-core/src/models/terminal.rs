//! Terminal-related data types for output rendering.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Serialize, Serializer};

use super::{DirEntry, Project, VirtualPath};

/// Text styling for file listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    /// Directory entries
    Directory,
    /// Regular file entries
    File,
    /// Hidden files (dimmed)
    Hidden,
}

/// Format for file listing entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ListFormat {
    /// Name only
    Short,
    /// Mode string and size before the name
    Long {
        permissions: &'static str,
        size: usize,
    },
}

/// Represents a single line of output in the terminal with a unique ID
#[derive(Clone, Debug)]
pub struct OutputLine {
    /// Unique ID for keying rendered lists
    pub id: usize,
    /// The actual output data
    pub data: OutputLineData,
}

/// The actual content of an output line
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum OutputLineData {
    /// Plain text output
    Text(String),
    /// Error message
    Error(String),
    /// Informational header, e.g. the echoed `$ cat about.txt`
    Info(String),
    /// Highlighted label followed by text (help and contact lines)
    Labeled { label: String, text: String },
    /// File listing entry
    ListEntry {
        name: String,
        style: TextStyle,
        format: ListFormat,
    },
    /// Rich project card
    ProjectCard(Project),
}

// Global counter for generating unique IDs
static OUTPUT_LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl OutputLine {
    fn new(data: OutputLineData) -> Self {
        Self {
            id: OUTPUT_LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text(s.into()))
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error(s.into()))
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Info(s.into()))
    }

    pub fn labeled(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(OutputLineData::Labeled {
            label: label.into(),
            text: text.into(),
        })
    }

    /// Create a listing entry for a directory child.
    pub fn list_entry(entry: &DirEntry, long: bool) -> Self {
        let style = if entry.is_dir {
            TextStyle::Directory
        } else if entry.is_hidden() {
            TextStyle::Hidden
        } else {
            TextStyle::File
        };
        let format = if long {
            ListFormat::Long {
                permissions: if entry.is_dir { "dr-xr-xr-x" } else { "-r--r--r--" },
                size: entry.size,
            }
        } else {
            ListFormat::Short
        };
        Self::new(OutputLineData::ListEntry {
            name: entry.name.clone(),
            style,
            format,
        })
    }

    pub fn project_card(project: &Project) -> Self {
        Self::new(OutputLineData::ProjectCard(project.clone()))
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // Only compare data, not ID
        self.data == other.data
    }
}

impl Serialize for OutputLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // IDs are process-local and not part of the output
        self.data.serialize(serializer)
    }
}

/// Build the prompt shown before a command, e.g. `root@localhost:~/Desktop`.
pub fn prompt_for(cwd: &VirtualPath) -> String {
    format!(
        "{}@{}:{}",
        crate::config::PROMPT_USER,
        crate::config::PROMPT_HOST,
        cwd
    )
}
