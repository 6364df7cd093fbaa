//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the virtual filesystem and returns results.

use crate::config::{ABOUT_TEXT, HELP_ENTRIES, contact};
use crate::models::{DirEntry, FileContent, FsEntry, Generator, OutputLine, VirtualPath};
use crate::shell::VirtualFs;
use crate::shell::error::ShellError;

use super::{Command, CommandResult, PathArg};

/// Execute a parsed command in `cwd`.
///
/// Navigation and clearing are returned in the result, not applied here.
pub fn execute_command(
    cmd: Command,
    cwd: &VirtualPath,
    fs: &VirtualFs,
) -> Result<CommandResult, ShellError> {
    let result = match cmd {
        Command::Help => CommandResult::output(
            HELP_ENTRIES
                .iter()
                .map(|(name, description)| OutputLine::labeled(*name, format!("- {}", description)))
                .collect(),
        ),
        Command::About => {
            let mut lines = vec![OutputLine::info("$ cat about.txt")];
            lines.extend(text_lines(ABOUT_TEXT));
            CommandResult::output(lines)
        }
        Command::Contact => {
            let mut lines = vec![OutputLine::info("$ cat contact.txt")];
            lines.extend(contact_lines());
            CommandResult::output(lines)
        }
        Command::Projects => {
            let mut lines = vec![OutputLine::info(format!("$ ls -la {}/", fs.projects_dir()))];
            lines.extend(fs.projects().iter().map(OutputLine::project_card));
            CommandResult::output(lines)
        }
        Command::Clear => CommandResult::clear(),
        Command::Pwd => CommandResult::output(vec![OutputLine::text(cwd.to_string())]),
        Command::Echo(text) => CommandResult::output(vec![OutputLine::text(text)]),
        Command::Cd(path) => execute_cd(path, cwd, fs)?,
        Command::Ls { path, long, all } => execute_ls(path, long, all, cwd, fs)?,
        Command::Cat(file) => execute_cat(file, cwd, fs)?,
    };
    Ok(result)
}

/// Execute `cd` command.
fn execute_cd(
    path: Option<PathArg>,
    cwd: &VirtualPath,
    fs: &VirtualFs,
) -> Result<CommandResult, ShellError> {
    let Some(path) = path else {
        return Ok(CommandResult::navigate(VirtualPath::home()));
    };

    let target = VirtualPath::resolve(cwd, path.as_str());
    match fs.get_entry(&target) {
        Some(entry) if entry.is_directory() => Ok(CommandResult::navigate(target)),
        Some(_) => Err(ShellError::not_a_directory("cd", path.as_str())),
        None => Err(ShellError::not_found("cd", path.as_str())),
    }
}

/// Execute `ls` command.
fn execute_ls(
    path: Option<PathArg>,
    long: bool,
    all: bool,
    cwd: &VirtualPath,
    fs: &VirtualFs,
) -> Result<CommandResult, ShellError> {
    let shown = path
        .as_ref()
        .map(|p| p.to_string())
        .unwrap_or_else(|| cwd.to_string());
    let target = VirtualPath::resolve(cwd, path.as_ref().map_or("", PathArg::as_str));

    let Some(entry) = fs.get_entry(&target) else {
        // Walking through a file is a type error, anything else is missing
        let parent_is_file = fs
            .get_entry(&target.parent())
            .is_some_and(|parent| !parent.is_directory());
        return Err(if parent_is_file {
            ShellError::not_a_directory("ls", shown)
        } else {
            ShellError::not_found("ls", shown)
        });
    };

    match entry {
        FsEntry::File { content } => {
            let listed = DirEntry {
                name: target.file_name().unwrap_or(shown.as_str()).to_string(),
                is_dir: false,
                size: content.size(),
            };
            Ok(CommandResult::output(vec![OutputLine::list_entry(
                &listed, long,
            )]))
        }
        FsEntry::Directory { .. } if fs.is_projects_dir(&target) && long => Ok(
            CommandResult::output(fs.projects().iter().map(OutputLine::project_card).collect()),
        ),
        FsEntry::Directory { .. } => {
            let entries = fs.list_dir(&target).unwrap_or_default();
            Ok(CommandResult::output(
                entries
                    .iter()
                    .filter(|entry| all || !entry.is_hidden())
                    .map(|entry| OutputLine::list_entry(entry, long))
                    .collect(),
            ))
        }
    }
}

/// Execute `cat` command.
fn execute_cat(
    file: PathArg,
    cwd: &VirtualPath,
    fs: &VirtualFs,
) -> Result<CommandResult, ShellError> {
    let target = VirtualPath::resolve(cwd, file.as_str());

    // Files in the projects directory are looked up in the project list
    if !target.is_home() && fs.is_projects_dir(&target.parent()) {
        return target
            .file_name()
            .and_then(|name| fs.project_by_file_name(name))
            .map(|project| CommandResult::output(vec![OutputLine::project_card(project)]))
            .ok_or_else(|| ShellError::not_found("cat", file.as_str()));
    }

    let entry = fs
        .get_entry(&target)
        .ok_or_else(|| ShellError::not_found("cat", file.as_str()))?;
    match entry.content() {
        Some(content) => Ok(CommandResult::output(render_content(content, fs))),
        None => Err(ShellError::is_a_directory("cat", file.as_str())),
    }
}

/// Render a file's content as output lines.
fn render_content(content: &FileContent, fs: &VirtualFs) -> Vec<OutputLine> {
    match content {
        FileContent::Text(text) => text_lines(text),
        FileContent::Generated(Generator::Contact) => contact_lines(),
        FileContent::Generated(generator) => fs
            .project(*generator)
            .map(|project| vec![OutputLine::project_card(project)])
            .unwrap_or_default(),
    }
}

fn text_lines(text: &str) -> Vec<OutputLine> {
    text.lines().map(OutputLine::text).collect()
}

fn contact_lines() -> Vec<OutputLine> {
    vec![
        OutputLine::labeled("Email:", contact::EMAIL),
        OutputLine::labeled("GitHub:", contact::GITHUB),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ASCII_BANNER;
    use crate::models::{ListFormat, OutputLineData, TextStyle};

    fn desktop() -> VirtualPath {
        VirtualPath::parse("~/Desktop")
    }

    fn run(cmd: Command, cwd: &VirtualPath) -> Result<CommandResult, ShellError> {
        execute_command(cmd, cwd, &VirtualFs::portfolio())
    }

    fn ls(path: Option<&str>, long: bool) -> Command {
        Command::Ls {
            path: path.map(PathArg::new),
            long,
            all: false,
        }
    }

    fn names(result: &CommandResult) -> Vec<String> {
        result
            .output
            .iter()
            .filter_map(|line| match &line.data {
                OutputLineData::ListEntry { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_cd_into_directory() {
        let result = run(Command::Cd(Some(PathArg::new("projects"))), &desktop()).unwrap();
        assert_eq!(
            result.navigate_to,
            Some(VirtualPath::parse("~/Desktop/projects"))
        );
        assert!(result.output.is_empty());
    }

    #[test]
    fn test_cd_without_argument_goes_home() {
        let result = run(Command::Cd(None), &desktop()).unwrap();
        assert_eq!(result.navigate_to, Some(VirtualPath::home()));
    }

    #[test]
    fn test_cd_errors() {
        assert_eq!(
            run(Command::Cd(Some(PathArg::new("nope"))), &desktop()),
            Err(ShellError::not_found("cd", "nope"))
        );
        assert_eq!(
            run(Command::Cd(Some(PathArg::new("banner.txt"))), &desktop()),
            Err(ShellError::not_a_directory("cd", "banner.txt"))
        );
    }

    #[test]
    fn test_cd_stays_at_root() {
        let result = run(Command::Cd(Some(PathArg::new("../../../.."))), &desktop()).unwrap();
        assert_eq!(result.navigate_to, Some(VirtualPath::home()));
    }

    #[test]
    fn test_ls_current_directory() {
        let result = run(ls(None, false), &desktop()).unwrap();
        assert_eq!(
            names(&result),
            vec!["projects", "about.txt", "banner.txt", "contact.txt"]
        );
        assert!(matches!(
            &result.output[0].data,
            OutputLineData::ListEntry { style: TextStyle::Directory, .. }
        ));
    }

    #[test]
    fn test_ls_hidden_needs_all_flag() {
        let home = VirtualPath::home();
        let plain = run(ls(None, false), &home).unwrap();
        assert_eq!(names(&plain), vec!["Desktop", "Documents"]);

        let all = run(
            Command::Ls {
                path: None,
                long: false,
                all: true,
            },
            &home,
        )
        .unwrap();
        assert_eq!(names(&all), vec!["Desktop", "Documents", ".bashrc"]);
    }

    #[test]
    fn test_ls_long_format() {
        let result = run(ls(Some("~/Documents"), true), &desktop()).unwrap();
        match &result.output[0].data {
            OutputLineData::ListEntry { name, format, .. } => {
                assert_eq!(name, "skills.txt");
                assert!(matches!(format, ListFormat::Long { permissions: "-r--r--r--", .. }));
            }
            other => panic!("Expected ListEntry, got {other:?}"),
        }
    }

    #[test]
    fn test_ls_projects_verbose_renders_cards_in_order() {
        let fs = VirtualFs::portfolio();
        let result = execute_command(ls(Some("projects"), true), &desktop(), &fs).unwrap();

        let titles: Vec<_> = result
            .output
            .iter()
            .map(|line| match &line.data {
                OutputLineData::ProjectCard(project) => project.title.clone(),
                other => panic!("Expected ProjectCard, got {other:?}"),
            })
            .collect();
        let expected: Vec<_> = fs.projects().iter().map(|p| p.title.clone()).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn test_ls_projects_short_lists_file_names() {
        let fs = VirtualFs::portfolio();
        let result = execute_command(ls(Some("projects"), false), &desktop(), &fs).unwrap();
        let expected: Vec<_> = fs.projects().iter().map(|p| p.file_name.clone()).collect();
        assert_eq!(names(&result), expected);
    }

    #[test]
    fn test_ls_file_prints_its_name() {
        let result = run(ls(Some("../Desktop/banner.txt"), false), &desktop()).unwrap();
        assert_eq!(names(&result), vec!["banner.txt"]);
    }

    #[test]
    fn test_ls_errors() {
        assert_eq!(
            run(ls(Some("nope"), false), &desktop()),
            Err(ShellError::not_found("ls", "nope"))
        );
        assert_eq!(
            run(ls(Some("banner.txt/inner"), false), &desktop()),
            Err(ShellError::not_a_directory("ls", "banner.txt/inner"))
        );
    }

    #[test]
    fn test_cat_text_file() {
        let result = run(Command::Cat(PathArg::new("banner.txt")), &desktop()).unwrap();
        let expected: Vec<_> = ASCII_BANNER.lines().map(OutputLine::text).collect();
        assert_eq!(result.output, expected);
    }

    #[test]
    fn test_cat_errors() {
        assert_eq!(
            run(Command::Cat(PathArg::new("projects")), &desktop()),
            Err(ShellError::is_a_directory("cat", "projects"))
        );
        assert_eq!(
            run(Command::Cat(PathArg::new("missing.txt")), &desktop()),
            Err(ShellError::not_found("cat", "missing.txt"))
        );
    }

    #[test]
    fn test_cat_project_files() {
        let fs = VirtualFs::portfolio();
        for project in fs.projects() {
            let path = format!("projects/{}", project.file_name);
            let result =
                execute_command(Command::Cat(PathArg::new(&path)), &desktop(), &fs).unwrap();
            assert_eq!(result.output, vec![OutputLine::project_card(project)]);
        }

        assert_eq!(
            execute_command(
                Command::Cat(PathArg::new("projects/unknown.txt")),
                &desktop(),
                &fs
            ),
            Err(ShellError::not_found("cat", "projects/unknown.txt"))
        );
    }

    #[test]
    fn test_cat_generated_contact() {
        let result = run(Command::Cat(PathArg::new("contact.txt")), &desktop()).unwrap();
        assert_eq!(result.output, contact_lines());
    }

    #[test]
    fn test_static_commands() {
        let help = run(Command::Help, &desktop()).unwrap();
        assert_eq!(help.output.len(), HELP_ENTRIES.len());
        for name in Command::names() {
            assert!(
                HELP_ENTRIES
                    .iter()
                    .any(|(usage, _)| usage.split_whitespace().next() == Some(*name)),
                "help does not list {name}"
            );
        }

        let about = run(Command::About, &desktop()).unwrap();
        assert_eq!(about.output[0], OutputLine::info("$ cat about.txt"));

        let projects = run(Command::Projects, &desktop()).unwrap();
        assert_eq!(
            projects.output[0],
            OutputLine::info("$ ls -la ~/Desktop/projects/")
        );
        assert_eq!(projects.output.len(), 1 + VirtualFs::portfolio().projects().len());

        let clear = run(Command::Clear, &desktop()).unwrap();
        assert!(clear.clear);
        assert!(clear.output.is_empty());

        let pwd = run(Command::Pwd, &desktop()).unwrap();
        assert_eq!(pwd.output, vec![OutputLine::text("~/Desktop")]);
    }
}
