//! Terminal emulator interface.

mod boot;
mod input;
mod output;
mod terminal;

pub use input::Input;
pub use output::Entry;
pub use terminal::Terminal;
