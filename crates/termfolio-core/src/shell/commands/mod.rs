//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `CommandResult` for command execution results
//! - `dispatch` for running one input line
//!
//! # Architecture
//!
//! Input is split on whitespace, parsed into the closed `Command` enum,
//! then executed via `execute_command`. Failures are `ShellError` values
//! that `dispatch` turns into error output.

mod execute;
mod result;

pub use execute::execute_command;
pub use result::CommandResult;

use std::fmt;

use crate::models::{OutputLine, VirtualPath};
use crate::shell::error::ShellError;
use crate::shell::levenshtein::suggest_command;
use crate::shell::VirtualFs;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd foo`, `cat bar.txt`).
///
/// Stored as typed; resolution and validation happen at execution time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    About,
    Projects,
    Contact,
    Clear,
    Pwd,
    Echo(String),
    /// `None` changes to home
    Cd(Option<PathArg>),
    /// `long` is `-l`, `all` is `-a`
    Ls {
        path: Option<PathArg>,
        long: bool,
        all: bool,
    },
    Cat(PathArg),
}

impl Command {
    /// Names of all commands, used for completion and typo suggestions.
    pub fn names() -> &'static [&'static str] {
        &[
            "help", "about", "projects", "contact", "clear", "cat", "cd", "ls", "pwd", "echo",
        ]
    }

    /// Commands whose argument is a filesystem path.
    pub fn takes_path(name: &str) -> bool {
        matches!(name, "cd" | "ls" | "cat")
    }

    /// Parse command from name and arguments.
    pub fn parse(name: &str, args: &[String]) -> Result<Self, ShellError> {
        let cmd = match name.to_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "about" => Self::About,
            "projects" => Self::Projects,
            "contact" => Self::Contact,
            "clear" | "cls" => Self::Clear,
            "pwd" => Self::Pwd,
            "echo" => Self::Echo(args.join(" ")),
            "cd" => Self::Cd(args.first().map(PathArg::new)),
            "ls" => {
                let mut long = false;
                let mut all = false;
                let mut path = None;
                for arg in args {
                    if let Some(flags) = arg.strip_prefix('-')
                        && !flags.is_empty()
                    {
                        for flag in flags.chars() {
                            match flag {
                                'l' => long = true,
                                'a' => all = true,
                                _ => return Err(ShellError::InvalidOption { cmd: "ls", flag }),
                            }
                        }
                    } else if path.is_none() {
                        path = Some(PathArg::new(arg));
                    }
                }
                Self::Ls { path, long, all }
            }
            "cat" => match args.first() {
                Some(file) => Self::Cat(PathArg::new(file)),
                None => return Err(ShellError::MissingOperand { cmd: "cat" }),
            },
            _ => {
                return Err(ShellError::UnknownCommand {
                    name: name.to_string(),
                    suggestion: suggest_command(name),
                });
            }
        };
        Ok(cmd)
    }

    /// Split an input line on whitespace and parse it.
    ///
    /// Returns `None` for a blank line.
    pub fn parse_line(input: &str) -> Option<Result<Self, ShellError>> {
        let mut words = input.split_whitespace();
        let name = words.next()?;
        let args: Vec<String> = words.map(str::to_string).collect();
        Some(Self::parse(name, &args))
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// Run one input line in `cwd` and return what it produced.
///
/// Errors become a single error line; nothing here is fatal.
pub fn dispatch(input: &str, cwd: &VirtualPath, fs: &VirtualFs) -> CommandResult {
    let Some(parsed) = Command::parse_line(input) else {
        return CommandResult::empty();
    };

    match parsed.and_then(|cmd| {
        log::debug!("executing {:?} in {}", cmd, cwd);
        execute_command(cmd, cwd, fs)
    }) {
        Ok(result) => result,
        Err(err) => {
            log::debug!("command failed: {}", err);
            CommandResult::output(vec![OutputLine::error(err.to_string())])
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_ls() {
        assert_eq!(
            Command::parse("ls", &[]),
            Ok(Command::Ls {
                path: None,
                long: false,
                all: false
            })
        );
        assert!(matches!(
            Command::parse("ls", &args(&["projects"])),
            Ok(Command::Ls { path: Some(ref p), long: false, all: false }) if *p == "projects"
        ));
        assert!(matches!(
            Command::parse("ls", &args(&["-la"])),
            Ok(Command::Ls {
                path: None,
                long: true,
                all: true
            })
        ));
        assert!(matches!(
            Command::parse("ls", &args(&["-l", "blog", "ignored"])),
            Ok(Command::Ls { path: Some(ref p), long: true, all: false }) if *p == "blog"
        ));
    }

    #[test]
    fn test_parse_ls_invalid_flag() {
        assert_eq!(
            Command::parse("ls", &args(&["-lz"])),
            Err(ShellError::InvalidOption { cmd: "ls", flag: 'z' })
        );
    }

    #[test]
    fn test_parse_cd() {
        assert_eq!(Command::parse("cd", &[]), Ok(Command::Cd(None)));
        assert!(matches!(
            Command::parse("cd", &args(&["/home"])),
            Ok(Command::Cd(Some(ref p))) if *p == "/home"
        ));
    }

    #[test]
    fn test_parse_cat() {
        assert!(matches!(
            Command::parse("cat", &args(&["file.txt"])),
            Ok(Command::Cat(ref f)) if *f == "file.txt"
        ));
        assert_eq!(
            Command::parse("cat", &[]),
            Err(ShellError::MissingOperand { cmd: "cat" })
        );
    }

    #[test]
    fn test_parse_case_insensitive_and_aliases() {
        assert_eq!(Command::parse("HELP", &[]), Ok(Command::Help));
        assert_eq!(Command::parse("?", &[]), Ok(Command::Help));
        assert_eq!(Command::parse("CleAr", &[]), Ok(Command::Clear));
        assert_eq!(Command::parse("cls", &[]), Ok(Command::Clear));
    }

    #[test]
    fn test_parse_unknown_suggests() {
        assert_eq!(
            Command::parse("hlep", &[]),
            Err(ShellError::UnknownCommand {
                name: "hlep".to_string(),
                suggestion: Some("help")
            })
        );
        assert!(matches!(
            Command::parse("foobarbaz", &[]),
            Err(ShellError::UnknownCommand { suggestion: None, .. })
        ));
    }

    #[test]
    fn test_parse_line() {
        assert!(Command::parse_line("   ").is_none());
        assert_eq!(
            Command::parse_line("  echo  hello   world "),
            Some(Ok(Command::Echo("hello world".to_string())))
        );
    }

    #[test]
    fn test_command_names() {
        let names = Command::names();
        for name in ["help", "about", "projects", "contact", "clear", "cd", "ls", "cat"] {
            assert!(names.contains(&name), "missing {name}");
        }
        assert!(Command::takes_path("cd"));
        assert!(!Command::takes_path("help"));
    }

    #[test]
    fn test_dispatch_renders_errors() {
        let fs = VirtualFs::portfolio();
        let cwd = VirtualPath::parse("~/Desktop");

        let result = dispatch("lss", &cwd, &fs);
        assert_eq!(
            result.output,
            vec![OutputLine::error("command not found: lss. Did you mean 'ls'?")]
        );
        assert!(result.navigate_to.is_none());

        let result = dispatch("nope", &cwd, &fs);
        assert_eq!(
            result.output,
            vec![OutputLine::error(
                "command not found: nope. Type 'help' for available commands."
            )]
        );
    }

    #[test]
    fn test_dispatch_blank_line() {
        let fs = VirtualFs::portfolio();
        let result = dispatch("  ", &VirtualPath::home(), &fs);
        assert!(result.output.is_empty());
        assert!(!result.clear);
    }
}
