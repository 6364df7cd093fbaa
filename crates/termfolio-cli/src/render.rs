//! ANSI rendering of shell output.

use crossterm::style::{Color as TermColor, Stylize};
use termfolio_core::TranscriptEntry;
use termfolio_core::models::{Color, ListFormat, OutputLine, OutputLineData, Project, TextStyle};

/// Turns output lines into printable strings, with or without color.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if !self.color {
            return text.to_string();
        }
        let (r, g, b) = color.rgb();
        text.with(TermColor::Rgb { r, g, b }).to_string()
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dim().to_string()
        } else {
            text.to_string()
        }
    }

    /// Prompt followed by `$ `.
    pub fn prompt(&self, prompt: &str) -> String {
        format!("{}$ ", self.paint(prompt, Color::Green))
    }

    /// A transcript entry: its prompt line, then its output.
    pub fn entry(&self, entry: &TranscriptEntry) -> Vec<String> {
        let mut lines = vec![format!("{}{}", self.prompt(&entry.prompt()), entry.command)];
        for line in &entry.output {
            lines.extend(self.line(line));
        }
        lines
    }

    /// One output line; project cards span several terminal lines.
    pub fn line(&self, line: &OutputLine) -> Vec<String> {
        match &line.data {
            OutputLineData::Text(text) => vec![text.clone()],
            OutputLineData::Error(text) => vec![self.paint(text, Color::Red)],
            OutputLineData::Info(text) => vec![self.paint(text, Color::Yellow)],
            OutputLineData::Labeled { label, text } => {
                vec![format!("{} {}", self.paint(label, Color::Mauve), text)]
            }
            OutputLineData::ListEntry {
                name,
                style,
                format,
            } => vec![self.list_entry(name, *style, format)],
            OutputLineData::ProjectCard(project) => self.project_card(project),
        }
    }

    fn list_entry(&self, name: &str, style: TextStyle, format: &ListFormat) -> String {
        let name = match style {
            TextStyle::Directory => self.paint(&format!("{}/", name), Color::Blue),
            TextStyle::File => name.to_string(),
            TextStyle::Hidden => self.dim(name),
        };
        match format {
            ListFormat::Short => name,
            ListFormat::Long { permissions, size } => {
                format!("{} {:>6} {}", self.dim(permissions), size, name)
            }
        }
    }

    fn project_card(&self, project: &Project) -> Vec<String> {
        let bar = self.paint("▌", project.color);
        let tags: Vec<String> = project
            .tags
            .iter()
            .map(|tag| self.paint(&format!("[{}]", tag), Color::for_tag(tag)))
            .collect();

        vec![
            format!("{} {}", bar, self.paint(&project.title, Color::Lavender)),
            format!("{} {}", bar, project.description),
            format!("{} {}", bar, self.dim(&project.link)),
            format!("{} {}", bar, tags.join(" ")),
        ]
    }

    /// Completion candidates on one line.
    pub fn candidates(&self, candidates: &[String]) -> String {
        candidates
            .iter()
            .map(|candidate| match candidate.strip_suffix('/') {
                Some(dir) => self.paint(&format!("{}/", dir), Color::Blue),
                None => candidate.clone(),
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}
