use std::collections::BTreeMap;

// =============================================================================
// File Content
// =============================================================================

/// Producers of file content that is rendered rather than stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Generator {
    /// Labeled contact lines.
    Contact,
    /// Card for the project at this index of the project list.
    ProjectCard(usize),
}

/// What a file holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileContent {
    /// Literal text, printed line by line.
    Text(&'static str),
    /// Output produced on demand.
    Generated(Generator),
}

impl FileContent {
    /// Byte size reported by `ls -l`. Generated files report zero.
    pub fn size(&self) -> usize {
        match self {
            Self::Text(text) => text.len(),
            Self::Generated(_) => 0,
        }
    }
}

// =============================================================================
// Filesystem Entry
// =============================================================================

/// Represents an entry in the virtual filesystem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FsEntry {
    Directory { children: BTreeMap<String, FsEntry> },
    File { content: FileContent },
}

impl FsEntry {
    /// Create a directory from `(name, entry)` pairs.
    pub fn dir<I>(children: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, FsEntry)>,
    {
        FsEntry::Directory {
            children: children
                .into_iter()
                .map(|(name, entry)| (name.to_string(), entry))
                .collect(),
        }
    }

    pub fn empty_dir() -> Self {
        FsEntry::Directory {
            children: BTreeMap::new(),
        }
    }

    /// Create a file holding literal text.
    pub fn text(text: &'static str) -> Self {
        FsEntry::File {
            content: FileContent::Text(text),
        }
    }

    /// Create a file whose content is generated.
    pub fn generated(generator: Generator) -> Self {
        FsEntry::File {
            content: FileContent::Generated(generator),
        }
    }

    /// Check if this entry is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, FsEntry::Directory { .. })
    }

    /// Children of a directory.
    pub fn children(&self) -> Option<&BTreeMap<String, FsEntry>> {
        match self {
            FsEntry::Directory { children } => Some(children),
            FsEntry::File { .. } => None,
        }
    }

    /// Content of a file.
    pub fn content(&self) -> Option<&FileContent> {
        match self {
            FsEntry::File { content } => Some(content),
            FsEntry::Directory { .. } => None,
        }
    }
}

/// Directory entry returned by `VirtualFs::list_dir`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
    /// Byte size for files, child count for directories.
    pub size: usize,
}

impl DirEntry {
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}
