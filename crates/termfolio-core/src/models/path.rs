//! Home-rooted virtual paths.

use std::fmt;

use serde::{Serialize, Serializer};

/// Symbol for the filesystem root.
pub const HOME: &str = "~";

/// A normalized absolute path inside the virtual filesystem.
///
/// Stored as the list of segments below the home directory, so `~` is the
/// empty list and `~/Desktop/projects` is `["Desktop", "projects"]`.
/// Segments never contain `/`, `.` or `..`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct VirtualPath {
    segments: Vec<String>,
}

impl VirtualPath {
    /// The home directory (`~`).
    pub fn home() -> Self {
        Self::default()
    }

    /// Resolve `raw` against `current` without touching the filesystem.
    ///
    /// - empty input returns `current` unchanged
    /// - `~` and `/` return home
    /// - `~/a` and `/a` are rebuilt from home
    /// - anything else is applied segment by segment to `current`
    ///
    /// `..` pops one segment and stops at home; `.` and empty segments are
    /// skipped.
    pub fn resolve(current: &VirtualPath, raw: &str) -> VirtualPath {
        if raw.is_empty() {
            return current.clone();
        }
        if raw == HOME || raw == "/" {
            return Self::home();
        }

        let (mut base, rest) = if let Some(rest) = raw.strip_prefix("~/") {
            (Self::home(), rest)
        } else if let Some(rest) = raw.strip_prefix('/') {
            (Self::home(), rest)
        } else {
            (current.clone(), raw)
        };

        for segment in rest.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    base.segments.pop();
                }
                name => base.segments.push(name.to_string()),
            }
        }
        base
    }

    /// Parse an absolute path such as `~/Desktop`.
    pub fn parse(raw: &str) -> Self {
        Self::resolve(&Self::home(), raw)
    }

    pub fn is_home(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Last segment, `None` for home.
    pub fn file_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Parent directory. Home is its own parent.
    pub fn parent(&self) -> VirtualPath {
        let mut parent = self.clone();
        parent.segments.pop();
        parent
    }

    /// Append a single child name.
    pub fn join(&self, name: &str) -> VirtualPath {
        let mut joined = self.clone();
        joined.segments.push(name.to_string());
        joined
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(HOME)?;
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

impl Serialize for VirtualPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
