//! Tab completion for command names and paths.
//!
//! Completion only rewrites the input when exactly one candidate matches:
//! the missing suffix is appended, followed by `/` for a directory or a space
//! for a file or command. Several candidates are reported for display and
//! leave the input untouched.

use crate::models::VirtualPath;
use crate::shell::{Command, VirtualFs};

// ============================================================================
// Public Types
// ============================================================================

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AutocompleteResult {
    /// Single match - the completed input.
    Single(String),
    /// Several matches - candidate names for display.
    Multiple(Vec<String>),
    /// No matches found.
    None,
}

// ============================================================================
// Path Parsing
// ============================================================================

/// A partial path split at its last `/`.
struct ParsedPath<'a> {
    /// Name being completed (after the last `/`).
    name_part: &'a str,
    /// Directory the name is looked up in.
    search_dir: VirtualPath,
}

impl<'a> ParsedPath<'a> {
    fn parse(partial: &'a str, cwd: &VirtualPath) -> Self {
        match partial.rfind('/') {
            Some(idx) => Self {
                name_part: &partial[idx + 1..],
                search_dir: VirtualPath::resolve(cwd, &partial[..=idx]),
            },
            None => Self {
                name_part: partial,
                search_dir: cwd.clone(),
            },
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Perform autocomplete on Tab press.
pub fn autocomplete(input: &str, cwd: &VirtualPath, fs: &VirtualFs) -> AutocompleteResult {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return AutocompleteResult::None;
    }

    match trimmed.split_once(char::is_whitespace) {
        Some((cmd, _)) => {
            let cmd = cmd.to_lowercase();
            if !Command::takes_path(&cmd) {
                return AutocompleteResult::None;
            }
            // Trailing argument; empty when the input ends in whitespace
            let partial = input
                .rsplit(char::is_whitespace)
                .next()
                .unwrap_or_default();
            complete_path(input, partial, cwd, fs, cmd == "cd")
        }
        None => complete_command(input, trimmed),
    }
}

// ============================================================================
// Command Completion
// ============================================================================

fn complete_command(input: &str, partial: &str) -> AutocompleteResult {
    let matches: Vec<&str> = Command::names()
        .iter()
        .copied()
        .filter(|name| name.starts_with(partial))
        .collect();

    match matches.as_slice() {
        [] => AutocompleteResult::None,
        [name] => AutocompleteResult::Single(format!("{}{} ", input, &name[partial.len()..])),
        _ => AutocompleteResult::Multiple(matches.iter().map(|m| m.to_string()).collect()),
    }
}

// ============================================================================
// Path Completion
// ============================================================================

fn complete_path(
    input: &str,
    partial: &str,
    cwd: &VirtualPath,
    fs: &VirtualFs,
    dirs_only: bool,
) -> AutocompleteResult {
    if partial.starts_with('-') {
        return AutocompleteResult::None;
    }
    // A bare home marker is already a complete directory name
    if partial == "~" {
        return AutocompleteResult::Single(format!("{}/", input));
    }

    let parsed = ParsedPath::parse(partial, cwd);
    let Some(entries) = fs.list_dir(&parsed.search_dir) else {
        return AutocompleteResult::None;
    };

    let show_hidden = parsed.name_part.starts_with('.');
    let matches: Vec<(&str, bool)> = entries
        .iter()
        .filter(|entry| !dirs_only || entry.is_dir)
        .filter(|entry| show_hidden || !entry.is_hidden())
        .filter(|entry| entry.name.starts_with(parsed.name_part))
        .map(|entry| (entry.name.as_str(), entry.is_dir))
        .collect();

    log::trace!(
        "completing {:?} in {}: {} candidate(s)",
        parsed.name_part,
        parsed.search_dir,
        matches.len()
    );

    match matches.as_slice() {
        [] => AutocompleteResult::None,
        [(name, is_dir)] => {
            let suffix = if *is_dir { "/" } else { " " };
            AutocompleteResult::Single(format!(
                "{}{}{}",
                input,
                &name[parsed.name_part.len()..],
                suffix
            ))
        }
        _ => AutocompleteResult::Multiple(
            matches
                .iter()
                .map(|(name, is_dir)| {
                    if *is_dir {
                        format!("{}/", name)
                    } else {
                        name.to_string()
                    }
                })
                .collect(),
        ),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(input: &str, cwd: &str) -> AutocompleteResult {
        autocomplete(input, &VirtualPath::parse(cwd), &VirtualFs::portfolio())
    }

    #[test]
    fn test_command_completion_single() {
        assert_eq!(
            complete("pr", "~"),
            AutocompleteResult::Single("projects ".to_string())
        );
        assert_eq!(
            complete("he", "~"),
            AutocompleteResult::Single("help ".to_string())
        );
    }

    #[test]
    fn test_command_completion_multiple_leaves_input() {
        match complete("c", "~") {
            AutocompleteResult::Multiple(matches) => {
                for name in ["cat", "cd", "clear", "contact"] {
                    assert!(matches.contains(&name.to_string()), "missing {name}");
                }
            }
            other => panic!("Expected multiple matches, got {other:?}"),
        }
    }

    #[test]
    fn test_no_match() {
        assert_eq!(complete("xyz", "~"), AutocompleteResult::None);
        assert_eq!(complete("", "~"), AutocompleteResult::None);
        assert_eq!(complete("help me", "~"), AutocompleteResult::None);
    }

    #[test]
    fn test_directory_completion_appends_separator() {
        assert_eq!(
            complete("cd pro", "~/Desktop"),
            AutocompleteResult::Single("cd projects/".to_string())
        );
        assert_eq!(
            complete("ls ~/Desk", "~/Documents"),
            AutocompleteResult::Single("ls ~/Desktop/".to_string())
        );
    }

    #[test]
    fn test_file_completion_appends_space() {
        assert_eq!(
            complete("cat ban", "~/Desktop"),
            AutocompleteResult::Single("cat banner.txt ".to_string())
        );
        assert_eq!(
            complete("cat ../Documents/sk", "~/Desktop"),
            AutocompleteResult::Single("cat ../Documents/skills.txt ".to_string())
        );
    }

    #[test]
    fn test_only_suffix_is_appended() {
        let input = "cat projects/flav";
        match complete(input, "~/Desktop") {
            AutocompleteResult::Single(completed) => {
                assert_eq!(completed, "cat projects/flavor-mixing.txt ");
                assert!(completed.starts_with(input));
                assert_eq!(completed.matches("flav").count(), 1);
            }
            other => panic!("Expected single match, got {other:?}"),
        }
    }

    #[test]
    fn test_cd_completes_directories_only() {
        // Desktop holds one directory; cd ignores the files
        assert_eq!(
            complete("cd ", "~/Desktop"),
            AutocompleteResult::Single("cd projects/".to_string())
        );
        assert_eq!(complete("cd ab", "~/Desktop"), AutocompleteResult::None);
    }

    #[test]
    fn test_multiple_path_matches() {
        match complete("ls ", "~/Desktop") {
            AutocompleteResult::Multiple(matches) => {
                assert_eq!(
                    matches,
                    vec!["projects/", "about.txt", "banner.txt", "contact.txt"]
                );
            }
            other => panic!("Expected multiple matches, got {other:?}"),
        }
    }

    #[test]
    fn test_hidden_entries_need_dot_prefix() {
        assert_eq!(
            complete("cat .b", "~"),
            AutocompleteResult::Single("cat .bashrc ".to_string())
        );
        assert_eq!(
            complete("cat D", "~"),
            AutocompleteResult::Multiple(vec!["Desktop/".to_string(), "Documents/".to_string()])
        );
    }

    #[test]
    fn test_home_and_root_prefixes() {
        assert_eq!(
            complete("cd ~", "~/Desktop"),
            AutocompleteResult::Single("cd ~/".to_string())
        );
        assert_eq!(
            complete("cd /Doc", "~/Desktop"),
            AutocompleteResult::Single("cd /Documents/".to_string())
        );
    }

    #[test]
    fn test_flags_and_missing_dirs() {
        assert_eq!(complete("ls -l", "~"), AutocompleteResult::None);
        assert_eq!(complete("cat nope/x", "~"), AutocompleteResult::None);
    }
}
