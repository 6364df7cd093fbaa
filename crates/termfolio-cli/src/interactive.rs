//! Raw-mode interactive session.
//!
//! Key events are mapped to session operations by [`handle_key`]; the loop
//! in [`run`] only does terminal I/O.

use std::io::{self, Write};

use crossterm::cursor::{MoveTo, MoveToColumn};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode};
use termfolio_core::config::WELCOME_TEXT;
use termfolio_core::{AutocompleteResult, Session, VirtualFs};

use crate::{CliError, Renderer};

/// What the terminal should do after a key press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Redraw the input line in place.
    Redraw,
    /// End the input line, print these lines, then a fresh prompt.
    Print(Vec<String>),
    /// Wipe the screen.
    ClearScreen,
    Exit,
}

/// Disables raw mode when dropped, including on early return.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            log::warn!("failed to restore terminal mode: {}", err);
        }
    }
}

/// Run until Ctrl-C or Ctrl-D.
pub fn run(session: &mut Session, fs: &VirtualFs, renderer: &Renderer) -> Result<(), CliError> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", WELCOME_TEXT)?;

    let _raw = RawMode::enable()?;
    log::debug!("interactive session started in {}", session.cwd());
    draw_input(&mut stdout, session, renderer)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match handle_key(session, key, fs, renderer) {
            Action::Redraw => {}
            Action::Print(lines) => {
                write!(stdout, "\r\n")?;
                for line in lines {
                    write!(stdout, "{}\r\n", line)?;
                }
            }
            Action::ClearScreen => {
                queue!(stdout, Clear(ClearType::All), Clear(ClearType::Purge), MoveTo(0, 0))?;
            }
            Action::Exit => {
                write!(stdout, "\r\n")?;
                stdout.flush()?;
                return Ok(());
            }
        }
        draw_input(&mut stdout, session, renderer)?;
    }
}

fn draw_input(out: &mut impl Write, session: &Session, renderer: &Renderer) -> io::Result<()> {
    queue!(
        out,
        MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        Print(renderer.prompt(&session.prompt())),
        Print(session.input()),
    )?;
    out.flush()
}

/// Apply one key press to the session.
pub fn handle_key(
    session: &mut Session,
    key: KeyEvent,
    fs: &VirtualFs,
    renderer: &Renderer,
) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c' | 'd') if ctrl => Action::Exit,
        KeyCode::Char('l') if ctrl => {
            session.clear();
            Action::ClearScreen
        }
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            let mut buffer = session.input().to_string();
            buffer.push(c);
            session.edit(buffer);
            Action::Redraw
        }
        KeyCode::Backspace => {
            let mut buffer = session.input().to_string();
            buffer.pop();
            session.edit(buffer);
            Action::Redraw
        }
        KeyCode::Up => {
            session.recall_previous();
            Action::Redraw
        }
        KeyCode::Down => {
            session.recall_next();
            Action::Redraw
        }
        KeyCode::Tab => match session.complete(fs) {
            AutocompleteResult::Multiple(candidates) => {
                Action::Print(vec![renderer.candidates(&candidates)])
            }
            _ => Action::Redraw,
        },
        KeyCode::Enter => {
            let typed = !session.input().trim().is_empty();
            match session.submit(fs) {
                Some(entry) => Action::Print(
                    entry
                        .output
                        .iter()
                        .flat_map(|line| renderer.line(line))
                        .collect(),
                ),
                // A non-blank line that records nothing is `clear`
                None if typed => Action::ClearScreen,
                None => Action::Print(Vec::new()),
            }
        }
        _ => Action::Redraw,
    }
}
