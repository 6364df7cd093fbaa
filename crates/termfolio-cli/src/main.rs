use std::io::{self, BufRead, IsTerminal};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use termfolio_cli::{CliError, Renderer, interactive, run_lines, write_transcript};
use termfolio_core::{Session, portfolio_fs};
use tracing_subscriber::EnvFilter;

/// Browse the portfolio terminal from a real one.
#[derive(Parser, Debug)]
#[command(name = "termfolio", version, about)]
struct Args {
    /// Run a command line and exit; may be repeated
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    commands: Vec<String>,

    /// Directory to start in, e.g. ~/Documents
    #[arg(long, value_name = "PATH")]
    cwd: Option<String>,

    /// Print the transcript as JSON
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Log to stderr. `TERMFOLIO_LOG` overrides the level chosen by `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("TERMFOLIO_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let fs = portfolio_fs();
    let mut session = match &args.cwd {
        Some(path) => Session::starting_at(path, fs)?,
        None => Session::new(),
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    let renderer = Renderer::new(!args.no_color && !args.json && stdout.is_terminal());

    let script: Vec<String> = if !args.commands.is_empty() {
        args.commands
    } else if !stdin.is_terminal() {
        stdin.lock().lines().collect::<Result<_, _>>()?
    } else {
        return interactive::run(&mut session, fs, &renderer);
    };

    log::info!("running {} scripted line(s)", script.len());
    run_lines(&mut session, &script, fs);
    write_transcript(&mut stdout.lock(), &session, &renderer, args.json)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("termfolio: {}", err);
            ExitCode::FAILURE
        }
    }
}
