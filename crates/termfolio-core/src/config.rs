//! Application configuration.
//!
//! Centralizes the constants the shell is built from. Text assets are loaded
//! at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// ASCII banner stored at `~/Desktop/banner.txt`.
pub const ASCII_BANNER: &str = include_str!("../assets/text/banner.txt");

/// Text of `about.txt`, also printed by the `about` command.
pub const ABOUT_TEXT: &str = include_str!("../assets/text/about.txt");

/// Text of `~/Documents/skills.txt`.
pub const SKILLS_TEXT: &str = include_str!("../assets/text/skills.txt");

/// Text of the hidden `~/.bashrc`.
pub const BASHRC_TEXT: &str = include_str!("../assets/text/bashrc.txt");

// =============================================================================
// Identity
// =============================================================================

/// User shown in the prompt.
pub const PROMPT_USER: &str = "root";

/// Host shown in the prompt.
pub const PROMPT_HOST: &str = "localhost";

/// Owner name used in the window title and footer.
pub const OWNER_NAME: &str = "charlie beutter";

/// Machine name shown in the footer.
pub const MACHINE_NAME: &str = "charlies-desktop";

/// Application version.
pub const APP_VERSION: &str = "v1.0.0";

/// Instruction line shown above the transcript.
pub const WELCOME_TEXT: &str = "root@localhost:~$ type 'help' to see available commands";

/// Contact details printed by `contact` and `cat contact.txt`.
pub mod contact {
    pub const EMAIL: &str = "charlie.beutter@gmail.com";
    pub const GITHUB: &str = "github.com/charliebutter";
}

// =============================================================================
// Filesystem Layout
// =============================================================================

/// Directory a fresh session starts in.
pub const START_PATH: &str = "~/Desktop";

/// Directory whose listing is synthesized from the project list.
pub const PROJECTS_PATH: &str = "~/Desktop/projects";

/// Extension appended to project slugs to form their file names.
pub const PROJECT_FILE_EXT: &str = ".txt";

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of transcript entries kept in a session.
pub const MAX_TRANSCRIPT_ENTRIES: usize = 500;

/// Largest edit distance for which an unknown command gets a suggestion.
pub const SUGGESTION_MAX_DISTANCE: usize = 2;

/// Entries printed by `help`, in display order.
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("help", "show this help message"),
    ("about", "about charlie"),
    ("projects", "view my projects"),
    ("contact", "contact information"),
    ("clear", "clear the terminal"),
    ("ls [-la] [path]", "list directory contents"),
    ("cd [path]", "change directory"),
    ("cat <file>", "print a file"),
    ("pwd", "print the working directory"),
    ("echo <text>", "print its arguments"),
];
