use serde::Serialize;

use crate::config::PROJECT_FILE_EXT;

// =============================================================================
// Color
// =============================================================================

/// Named display colors from the terminal palette (Catppuccin Mocha).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Text,
    Green,
    Yellow,
    Red,
    Blue,
    Pink,
    Lavender,
    Mauve,
    Peach,
}

impl Color {
    /// Hex value used by front ends that render true color.
    pub fn hex(self) -> &'static str {
        match self {
            Self::Text => "#cdd6f4",
            Self::Green => "#a6e3a1",
            Self::Yellow => "#f9e2af",
            Self::Red => "#f38ba8",
            Self::Blue => "#89b4fa",
            Self::Pink => "#f5c2e7",
            Self::Lavender => "#b4befe",
            Self::Mauve => "#cba6f7",
            Self::Peach => "#fab387",
        }
    }

    /// RGB components of [`Color::hex`].
    pub fn rgb(self) -> (u8, u8, u8) {
        let hex = self.hex().trim_start_matches('#');
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }

    /// Color a project tag is shown in.
    pub fn for_tag(tag: &str) -> Self {
        match tag {
            "react" => Self::Blue,
            "python" => Self::Green,
            "flask" => Self::Peach,
            _ => Self::Text,
        }
    }
}

// =============================================================================
// Project
// =============================================================================

/// A portfolio project, rendered as a card by `projects`, `ls -l` and `cat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: String,
    /// Name of the synthesized file in the projects directory.
    pub file_name: String,
    pub description: String,
    pub link: String,
    pub color: Color,
    pub tags: Vec<String>,
}

impl Project {
    pub fn new(title: &str, description: &str, link: &str, color: Color, tags: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            file_name: file_name_for(title),
            description: description.to_string(),
            link: link.to_string(),
            color,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// The hardcoded project list, in display order.
    pub fn portfolio() -> Vec<Project> {
        vec![
            Project::new(
                "Flavor Mixing",
                "An interactive crowdsourced experiment where users vote on hypothetical \
                 flavor combinations. The app collects data on which flavor pairings work \
                 best according to public opinion and visualizes the results in real-time.",
                "https://flavor-mixing.com",
                Color::Green,
                &["react"],
            ),
            Project::new(
                "Fantasy Names",
                "A fantasy name generator built with linguistic principles. Uses a \
                 block-based algorithm with compatibility scoring to create \
                 authentic-sounding names for different fantasy species such as elves, \
                 orcs, and druids.",
                "https://fantasy-names.charliebeutter.com",
                Color::Pink,
                &["python", "flask"],
            ),
        ]
    }
}

/// Lowercase the title, collapse every run of non-alphanumerics into `-`
/// and append the project file extension.
fn file_name_for(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    format!("{}{}", slug, PROJECT_FILE_EXT)
}
