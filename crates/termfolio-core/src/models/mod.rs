//! Data models and types for the shell.
//!
//! Contains domain types for:
//! - [`FsEntry`], [`FileContent`], [`Generator`], [`DirEntry`] - Virtual filesystem representation
//! - [`VirtualPath`] - Home-rooted normalized paths
//! - [`Project`], [`Color`] - Portfolio records
//! - [`OutputLine`] - Terminal output types

mod filesystem;
mod path;
mod project;
mod terminal;

pub use filesystem::{DirEntry, FileContent, FsEntry, Generator};
pub use path::{HOME, VirtualPath};
pub use project::{Color, Project};
pub use terminal::{ListFormat, OutputLine, OutputLineData, TextStyle, prompt_for};
