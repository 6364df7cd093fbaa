use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::config::{ABOUT_TEXT, ASCII_BANNER, BASHRC_TEXT, PROJECTS_PATH, SKILLS_TEXT};
use crate::models::{DirEntry, FsEntry, Generator, Project, VirtualPath};

static PORTFOLIO: LazyLock<VirtualFs> = LazyLock::new(VirtualFs::portfolio);

/// The portfolio filesystem, built once per process.
pub fn portfolio_fs() -> &'static VirtualFs {
    &PORTFOLIO
}

/// Read-only virtual filesystem.
///
/// The tree is a literal of nested [`FsEntry`] values rooted at `~`. One
/// directory, the projects directory, gets its files from the project list
/// when the filesystem is built; those files render project cards.
#[derive(Clone, Debug)]
pub struct VirtualFs {
    /// Root directory entry containing all files
    root: FsEntry,
    projects: Vec<Project>,
    projects_dir: VirtualPath,
}

impl VirtualFs {
    /// Build a filesystem and fill `projects_dir` from `projects`.
    ///
    /// Project files that would shadow an existing entry are skipped, as are
    /// all of them if `projects_dir` is not a directory of `root`.
    pub fn new(root: FsEntry, projects: Vec<Project>, projects_dir: VirtualPath) -> Self {
        let mut fs = Self {
            root,
            projects: Vec::new(),
            projects_dir,
        };

        let Some(children) = dir_children_mut(&mut fs.root, &fs.projects_dir) else {
            log::warn!(
                "projects directory {} missing, project files not mounted",
                fs.projects_dir
            );
            return fs;
        };

        let mut mounted = Vec::with_capacity(projects.len());
        for project in projects {
            if children.contains_key(&project.file_name) {
                log::warn!(
                    "project file '{}' blocked by existing entry",
                    project.file_name
                );
                continue;
            }
            children.insert(
                project.file_name.clone(),
                FsEntry::generated(Generator::ProjectCard(mounted.len())),
            );
            mounted.push(project);
        }
        fs.projects = mounted;
        fs
    }

    /// The portfolio tree.
    ///
    /// ```text
    /// ~
    /// ├── .bashrc
    /// ├── Desktop/
    /// │   ├── about.txt
    /// │   ├── banner.txt
    /// │   ├── contact.txt
    /// │   └── projects/
    /// └── Documents/
    ///     └── skills.txt
    /// ```
    pub fn portfolio() -> Self {
        let root = FsEntry::dir([
            (".bashrc", FsEntry::text(BASHRC_TEXT)),
            (
                "Desktop",
                FsEntry::dir([
                    ("about.txt", FsEntry::text(ABOUT_TEXT)),
                    ("banner.txt", FsEntry::text(ASCII_BANNER)),
                    ("contact.txt", FsEntry::generated(Generator::Contact)),
                    ("projects", FsEntry::empty_dir()),
                ]),
            ),
            (
                "Documents",
                FsEntry::dir([("skills.txt", FsEntry::text(SKILLS_TEXT))]),
            ),
        ]);

        Self::new(root, Project::portfolio(), VirtualPath::parse(PROJECTS_PATH))
    }

    /// Get an entry by absolute path.
    ///
    /// Walks from the root through directory children; `None` if a segment
    /// is missing or a file sits where a directory is expected.
    pub fn get_entry(&self, path: &VirtualPath) -> Option<&FsEntry> {
        let mut current = &self.root;
        for part in path.segments() {
            current = current.children()?.get(part)?;
        }
        Some(current)
    }

    /// Check if a path is a directory.
    pub fn is_directory(&self, path: &VirtualPath) -> bool {
        self.get_entry(path).is_some_and(FsEntry::is_directory)
    }

    /// List directory contents.
    ///
    /// Directories come first, then files, hidden files last, each group
    /// alphabetical. The projects directory keeps project-list order.
    pub fn list_dir(&self, path: &VirtualPath) -> Option<Vec<DirEntry>> {
        let children = self.get_entry(path)?.children()?;
        let mut items: Vec<DirEntry> = children
            .iter()
            .map(|(name, entry)| DirEntry {
                name: name.clone(),
                is_dir: entry.is_directory(),
                size: match entry {
                    FsEntry::Directory { children } => children.len(),
                    FsEntry::File { content } => content.size(),
                },
            })
            .collect();

        if self.is_projects_dir(path) {
            let position = |name: &str| {
                self.projects
                    .iter()
                    .position(|p| p.file_name == name)
                    .unwrap_or(usize::MAX)
            };
            items.sort_by_key(|entry| position(&entry.name));
            return Some(items);
        }

        items.sort_by(|a, b| {
            match (a.is_dir, b.is_dir, a.is_hidden(), b.is_hidden()) {
                (true, false, _, _) => std::cmp::Ordering::Less,
                (false, true, _, _) => std::cmp::Ordering::Greater,
                (_, _, false, true) => std::cmp::Ordering::Less,
                (_, _, true, false) => std::cmp::Ordering::Greater,
                _ => a.name.cmp(&b.name),
            }
        });
        Some(items)
    }

    /// Projects mounted in the projects directory, in display order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn projects_dir(&self) -> &VirtualPath {
        &self.projects_dir
    }

    pub fn is_projects_dir(&self, path: &VirtualPath) -> bool {
        *path == self.projects_dir
    }

    /// Find a project by its synthesized file name.
    pub fn project_by_file_name(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.file_name == name)
    }

    /// Project rendered by a generator, if it is a project card.
    pub fn project(&self, generator: Generator) -> Option<&Project> {
        match generator {
            Generator::ProjectCard(index) => self.projects.get(index),
            Generator::Contact => None,
        }
    }
}

/// Mutable children of the directory at `path`.
fn dir_children_mut<'a>(
    root: &'a mut FsEntry,
    path: &VirtualPath,
) -> Option<&'a mut BTreeMap<String, FsEntry>> {
    let mut current = root;
    for part in path.segments() {
        current = match current {
            FsEntry::Directory { children } => children.get_mut(part)?,
            FsEntry::File { .. } => return None,
        };
    }
    match current {
        FsEntry::Directory { children } => Some(children),
        FsEntry::File { .. } => None,
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::portfolio()
    }
}
