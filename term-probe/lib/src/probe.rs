//! The terminal probe: width of the terminal behind stderr, and TTY detection.
//!
//! [`TerminalProbe`] is the seam; [`NativeProbe`] is the implementation for
//! the platform the crate was compiled for. The free functions in this module
//! all delegate to `NativeProbe`, so most callers never name the trait.
//!
//! ## Examples
//!
//! ```
//! use term_probe::{StdStream, console_width_or, DEFAULT_WIDTH};
//!
//! let width = console_width_or(DEFAULT_WIDTH);
//! assert!(width > 0);
//!
//! if !StdStream::Stdout.is_terminal() {
//!     // piped: skip progress bars and colors
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sys::imp;

/// A file descriptor number as understood by the C runtime (`int`).
///
/// On Windows this is a CRT descriptor (`0`, `1`, `2`, or one returned by
/// `_open_osfhandle`), not a `HANDLE`.
pub type RawFd = std::ffi::c_int;

/// Width to assume when the real one cannot be determined.
pub const DEFAULT_WIDTH: u16 = 80;

/// Questions about the terminal, answered by the OS at call time.
pub trait TerminalProbe {
    /// Column count of the terminal behind standard error, with the reason
    /// when it cannot be determined.
    fn try_console_width(&self) -> Result<u16>;

    /// Whether `fd` refers to an interactive terminal. Invalid and closed
    /// descriptors are not terminals.
    fn is_a_tty(&self, fd: RawFd) -> bool;

    /// Column count of the terminal behind standard error, or `None` when
    /// stderr is not a terminal or the OS call fails.
    fn console_width(&self) -> Option<u16> {
        match self.try_console_width() {
            Ok(cols) => Some(cols),
            Err(e) => {
                tracing::debug!(error = %e, "Console width unknown");
                None
            }
        }
    }

    /// Legacy form of [`console_width`](Self::console_width): `0` stands for
    /// "unknown".
    fn get_console_width(&self) -> u32 {
        self.console_width().map_or(0, u32::from)
    }
}

/// The probe for the platform this crate was compiled for.
///
/// - Unix: `ioctl(STDERR_FILENO, TIOCGWINSZ)` and `isatty(fd)`
/// - Windows: `GetConsoleScreenBufferInfo` on `STD_ERROR_HANDLE` and `_isatty(fd)`
/// - anything else: width always unknown, nothing is a terminal
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NativeProbe;

impl TerminalProbe for NativeProbe {
    fn try_console_width(&self) -> Result<u16> {
        imp::stderr_columns()
    }

    fn is_a_tty(&self, fd: RawFd) -> bool {
        let tty = imp::isatty(fd);
        tracing::trace!(fd, is_tty = tty, "Checked descriptor for a terminal");
        tty
    }
}

/// Column count of the terminal behind standard error.
///
/// Returns `None` when stderr is redirected to a file or pipe, when there is
/// no controlling terminal, or when the terminal reports zero columns.
pub fn console_width() -> Option<u16> {
    NativeProbe.console_width()
}

/// Column count of the terminal behind standard error, `0` when unknown.
///
/// Callers must treat `0` as "apply a fallback width". Prefer
/// [`console_width`] or [`console_width_or`] in new code.
pub fn get_console_width() -> u32 {
    NativeProbe.get_console_width()
}

/// Like [`console_width`], but keeps the reason it failed.
pub fn try_console_width() -> Result<u16> {
    NativeProbe.try_console_width()
}

/// Column count of the terminal behind standard error, or `fallback`.
pub fn console_width_or(fallback: u16) -> u16 {
    console_width().unwrap_or(fallback)
}

/// `(columns, rows)` of the terminal behind standard error.
///
/// `Some` exactly when [`console_width`] is, with the same column count;
/// rows may be `0` when the terminal never reported them.
pub fn console_size() -> Option<(u16, u16)> {
    imp::stderr_size()
}

/// Whether `fd` is connected to an interactive terminal rather than a file,
/// pipe or socket. Invalid descriptors yield `false`.
pub fn is_a_tty(fd: RawFd) -> bool {
    NativeProbe.is_a_tty(fd)
}

/// The three standard streams and their conventional descriptor numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StdStream {
    Stdin,
    Stdout,
    Stderr,
}

impl StdStream {
    pub const ALL: [StdStream; 3] = [StdStream::Stdin, StdStream::Stdout, StdStream::Stderr];

    pub const fn fd(self) -> RawFd {
        match self {
            StdStream::Stdin => 0,
            StdStream::Stdout => 1,
            StdStream::Stderr => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            StdStream::Stdin => "stdin",
            StdStream::Stdout => "stdout",
            StdStream::Stderr => "stderr",
        }
    }

    pub fn is_terminal(self) -> bool {
        is_a_tty(self.fd())
    }
}

impl fmt::Display for StdStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of every query a probe can answer, taken at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeReport {
    /// Columns of the terminal behind stderr, `None` if unknown
    pub width: Option<u16>,
    pub stdin_tty: bool,
    pub stdout_tty: bool,
    pub stderr_tty: bool,
}

impl ProbeReport {
    pub fn capture<P: TerminalProbe + ?Sized>(probe: &P) -> ProbeReport {
        ProbeReport {
            width: probe.console_width(),
            stdin_tty: probe.is_a_tty(StdStream::Stdin.fd()),
            stdout_tty: probe.is_a_tty(StdStream::Stdout.fd()),
            stderr_tty: probe.is_a_tty(StdStream::Stderr.fd()),
        }
    }

    pub fn is_tty(&self, stream: StdStream) -> bool {
        match stream {
            StdStream::Stdin => self.stdin_tty,
            StdStream::Stdout => self.stdout_tty,
            StdStream::Stderr => self.stderr_tty,
        }
    }
}

impl Default for ProbeReport {
    fn default() -> ProbeReport {
        ProbeReport::capture(&NativeProbe)
    }
}
