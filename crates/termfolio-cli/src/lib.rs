//! Terminal front end for the termfolio shell.
//!
//! Two modes share one [`Session`]:
//! - scripted: command lines from `-c` or stdin, transcript printed at the end
//! - interactive: a raw-mode line editor driven by key events

pub mod error;
pub mod interactive;
pub mod render;

use std::io::Write;

use termfolio_core::{Session, VirtualFs};

pub use error::CliError;
pub use render::Renderer;

/// Submit each line in order, as if typed.
pub fn run_lines<I, S>(session: &mut Session, lines: I, fs: &VirtualFs)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        session.run(line.as_ref(), fs);
    }
}

/// Write the session's transcript as styled text or as a JSON array.
pub fn write_transcript(
    out: &mut impl Write,
    session: &Session,
    renderer: &Renderer,
    json: bool,
) -> Result<(), CliError> {
    if json {
        let entries: Vec<_> = session.transcript().iter().collect();
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
        return Ok(());
    }

    for entry in session.transcript() {
        for line in renderer.entry(entry) {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use termfolio_core::portfolio_fs;

    fn scripted(lines: &[&str], json: bool) -> String {
        let fs = portfolio_fs();
        let mut session = Session::new();
        run_lines(&mut session, lines, fs);

        let mut out = Vec::new();
        write_transcript(&mut out, &session, &Renderer::new(false), json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_transcript() {
        let out = scripted(&["pwd", "cd ..", "ls"], false);
        assert_eq!(
            out,
            "root@localhost:~/Desktop$ pwd\n\
             ~/Desktop\n\
             root@localhost:~/Desktop$ cd ..\n\
             root@localhost:~$ ls\n\
             Desktop/\n\
             Documents/\n"
        );
    }

    #[test]
    fn test_clear_drops_earlier_entries() {
        let out = scripted(&["help", "clear", "echo hi"], false);
        assert_eq!(out, "root@localhost:~/Desktop$ echo hi\nhi\n");
    }

    #[test]
    fn test_json_transcript() {
        let out = scripted(&["cat missing.txt"], true);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["command"], "cat missing.txt");
        assert_eq!(
            value[0]["output"][0]["value"],
            "cat: no such file or directory: missing.txt"
        );
    }
}
