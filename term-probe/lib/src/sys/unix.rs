use std::io;

use crate::error::{ProbeError, Result};
use crate::probe::RawFd;

/// Raw `ioctl(TIOCGWINSZ)` on `fd`.
fn read_winsize(fd: RawFd) -> Result<libc::winsize> {
    // SAFETY: winsize is plain old data and TIOCGWINSZ only writes into it.
    let mut winsize: libc::winsize = unsafe { std::mem::zeroed() };
    // SAFETY: the pointer is to a live, correctly sized winsize; a bad fd is
    // reported through the return value.
    if unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut winsize) } != 0 {
        return Err(ProbeError::Os {
            fd,
            source: io::Error::last_os_error(),
        });
    }
    Ok(winsize)
}

/// Column count of the terminal behind `fd`.
pub(crate) fn window_columns(fd: RawFd) -> Result<u16> {
    match read_winsize(fd)?.ws_col {
        0 => Err(ProbeError::ZeroColumns),
        cols => Ok(cols),
    }
}

/// `(columns, rows)` of the terminal behind `fd`. Known exactly when
/// [`window_columns`] is; rows may be `0` on a terminal that never set them.
pub(crate) fn window_size(fd: RawFd) -> Option<(u16, u16)> {
    read_winsize(fd)
        .ok()
        .filter(|w| w.ws_col > 0)
        .map(|w| (w.ws_col, w.ws_row))
}

pub(crate) fn stderr_columns() -> Result<u16> {
    window_columns(libc::STDERR_FILENO)
}

pub(crate) fn stderr_size() -> Option<(u16, u16)> {
    window_size(libc::STDERR_FILENO)
}

pub(crate) fn isatty(fd: RawFd) -> bool {
    // SAFETY: isatty() takes any int and returns 0 for bad descriptors.
    unsafe { libc::isatty(fd) != 0 }
}
