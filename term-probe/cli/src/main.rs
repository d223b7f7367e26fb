//! Terminal probe CLI.
//!
//! Reports what the OS says about the terminal this process runs in:
//! - the column width of the terminal behind stderr
//! - whether a descriptor (or each standard stream) is a TTY

use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use serde::Serialize;
use term_probe::{NativeProbe, ProbeReport, RawFd, StdStream, console_size, is_a_tty, try_console_width};

/// Terminal width and TTY probe
#[derive(Parser, Debug)]
#[command(name = "tprobe")]
#[command(author, version, about = "Report terminal width and TTY status")]
#[command(after_help = "\
EXIT STATUS:
  `tprobe tty <FD>` exits 0 when FD is a terminal and 1 otherwise, so it can
  be used directly in shell conditionals:

    if tprobe tty 1 >/dev/null; then echo interactive; fi

SHELL COMPLETIONS:
    tprobe --completions bash >> ~/.bashrc
    tprobe --completions zsh > ~/.zfunc/_tprobe
    tprobe --completions fish > ~/.config/fish/completions/tprobe.fish
")]
struct Args {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (explain why a width is unknown)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,

    #[command(subcommand)]
    command: Option<Command>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the column width of the terminal behind stderr
    ///
    /// Prints 0 when stderr is not a terminal, unless --fallback is given.
    Width {
        /// Width to print when the real one cannot be determined
        #[arg(long, value_name = "COLUMNS")]
        fallback: Option<u16>,
    },

    /// Report whether a file descriptor is a terminal
    ///
    /// Prints true or false; exits 0 for a terminal and 1 otherwise.
    Tty {
        /// Descriptor number (0 = stdin, 1 = stdout, 2 = stderr)
        #[arg(value_name = "FD", allow_negative_numbers = true)]
        fd: RawFd,
    },
}

#[derive(Debug, Serialize)]
struct WidthOutput {
    /// Columns of the terminal behind stderr, `null` if unknown
    width: Option<u16>,
    /// Present when --fallback was applied
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback: Option<u16>,
}

#[derive(Debug, Serialize)]
struct TtyOutput {
    fd: RawFd,
    is_tty: bool,
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    // Setup logging if RUST_LOG is set; stdout is reserved for results.
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let args = Args::parse();

    if let Some(shell) = args.completions {
        let mut cmd = Args::command();
        clap_complete::generate(shell, &mut cmd, "tprobe", &mut std::io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    match args.command {
        Some(Command::Width { fallback }) => print_width(fallback, args.json, args.verbose),
        Some(Command::Tty { fd }) => print_tty(fd, args.json),
        None => print_report(args.json),
    }
}

fn print_width(fallback: Option<u16>, json: bool, verbose: bool) -> color_eyre::Result<ExitCode> {
    let width = match try_console_width() {
        Ok(cols) => Some(cols),
        Err(e) => {
            tracing::debug!(error = %e, "Falling back for console width");
            if verbose {
                eprintln!("width unknown: {e}");
            }
            None
        }
    };

    if json {
        let output = WidthOutput {
            width,
            fallback: width.is_none().then_some(fallback).flatten(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        // Without a fallback this is the historical sentinel: 0 means unknown.
        println!("{}", width.or(fallback).unwrap_or(0));
    }

    Ok(ExitCode::SUCCESS)
}

fn print_tty(fd: RawFd, json: bool) -> color_eyre::Result<ExitCode> {
    let is_tty = is_a_tty(fd);

    if json {
        println!("{}", serde_json::to_string_pretty(&TtyOutput { fd, is_tty })?);
    } else {
        println!("{is_tty}");
    }

    Ok(if is_tty { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn print_report(json: bool) -> color_eyre::Result<ExitCode> {
    let report = ProbeReport::capture(&NativeProbe);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(ExitCode::SUCCESS);
    }

    match report.width {
        Some(cols) => match console_size() {
            Some((_, rows)) => println!("Width:  {cols} columns ({rows} rows)"),
            None => println!("Width:  {cols} columns"),
        },
        None => println!("Width:  unknown (stderr is not a terminal)"),
    }
    for stream in StdStream::ALL {
        let label = format!("{stream}:");
        println!(
            "{label:<7} {}",
            if report.is_tty(stream) { "tty" } else { "not a tty" }
        );
    }

    Ok(ExitCode::SUCCESS)
}
