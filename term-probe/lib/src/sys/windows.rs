use std::io;

use terminal_size::{Height, Width, terminal_size_of};

use crate::error::{ProbeError, Result};
use crate::probe::RawFd;

/// Visible window width of the console screen buffer behind stderr.
///
/// `terminal_size_of` asks `GetConsoleScreenBufferInfo` on the handle and
/// computes `srWindow.Right - srWindow.Left + 1`; it yields `None` when the
/// handle is not a console.
pub(crate) fn stderr_columns() -> Result<u16> {
    match terminal_size_of(io::stderr()) {
        Some((Width(0), _)) => Err(ProbeError::ZeroColumns),
        Some((Width(cols), _)) => Ok(cols),
        None => Err(ProbeError::NoConsole),
    }
}

pub(crate) fn stderr_size() -> Option<(u16, u16)> {
    terminal_size_of(io::stderr())
        .filter(|(Width(w), _)| *w > 0)
        .map(|(Width(w), Height(h))| (w, h))
}

/// `_isatty` on the C runtime's descriptor table, not on an OS handle.
pub(crate) fn isatty(fd: RawFd) -> bool {
    if fd < 0 {
        return false;
    }
    let _quiet = QuietInvalidParameters::install();
    // SAFETY: with the thread's invalid-parameter handler muted, `_isatty`
    // answers 0 (errno EBADF) for descriptors outside the CRT table.
    unsafe { libc::isatty(fd) != 0 }
}

/// `void (*)(const wchar_t*, const wchar_t*, const wchar_t*, unsigned, uintptr_t)`
#[cfg(target_env = "msvc")]
type InvalidParameterHandler =
    Option<unsafe extern "C" fn(*const u16, *const u16, *const u16, u32, usize)>;

#[cfg(target_env = "msvc")]
unsafe extern "C" {
    fn _set_thread_local_invalid_parameter_handler(
        handler: InvalidParameterHandler,
    ) -> InvalidParameterHandler;
}

#[cfg(target_env = "msvc")]
unsafe extern "C" fn ignore_invalid_parameter(
    _expression: *const u16,
    _function: *const u16,
    _file: *const u16,
    _line: u32,
    _reserved: usize,
) {
}

/// Replaces the CRT's invalid-parameter handler on this thread with a no-op
/// for as long as it lives. The default handler fast-fails the process, which
/// is what `_isatty` triggers for any `fd >= _nhandle`.
struct QuietInvalidParameters {
    #[cfg(target_env = "msvc")]
    previous: InvalidParameterHandler,
}

impl QuietInvalidParameters {
    fn install() -> QuietInvalidParameters {
        QuietInvalidParameters {
            // SAFETY: the handler only affects this thread and is restored in Drop.
            #[cfg(target_env = "msvc")]
            previous: unsafe {
                _set_thread_local_invalid_parameter_handler(Some(ignore_invalid_parameter))
            },
        }
    }
}

impl Drop for QuietInvalidParameters {
    fn drop(&mut self) {
        // SAFETY: puts back whatever was installed before `install`.
        #[cfg(target_env = "msvc")]
        unsafe {
            _set_thread_local_invalid_parameter_handler(self.previous);
        }
    }
}
