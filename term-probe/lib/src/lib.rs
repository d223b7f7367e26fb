//! # term-probe
//!
//! Two questions about the terminal a process is attached to, answered by the
//! host operating system at call time:
//!
//! - **Width**: how many columns the terminal behind **stderr** shows
//! - **TTY**: whether a file descriptor refers to an interactive terminal
//!
//! Nothing is cached. Every call goes back to the OS, so a resize between two
//! calls is observed by the second one.
//!
//! ## Quick Start
//!
//! ```
//! use term_probe::{DEFAULT_WIDTH, console_width, is_a_tty};
//!
//! let width = console_width().unwrap_or(DEFAULT_WIDTH);
//! let interactive = is_a_tty(2);
//!
//! println!("wrapping at {width} columns (stderr is a tty: {interactive})");
//! ```
//!
//! ## Modules
//!
//! - [`probe`] - The [`TerminalProbe`] trait, the platform's [`NativeProbe`]
//!   and the free functions built on it
//! - [`error`] - [`ProbeError`], returned only by the `try_*` diagnostics
//!
//! Platform code lives in a private `sys` module: `ioctl(TIOCGWINSZ)` and
//! `isatty` on Unix, the console screen buffer and the CRT's `_isatty` on
//! Windows, and an always-unknown fallback everywhere else.

pub mod error;
pub mod probe;
mod sys;

pub use error::{ProbeError, Result};
pub use probe::{
    DEFAULT_WIDTH, NativeProbe, ProbeReport, RawFd, StdStream, TerminalProbe, console_size,
    console_width, console_width_or, get_console_width, is_a_tty, try_console_width,
};
