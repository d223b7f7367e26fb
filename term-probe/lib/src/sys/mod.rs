//! Per-platform OS calls. Exactly one of the submodules is compiled and
//! re-exported as `imp`; each provides `stderr_columns`, `stderr_size` and
//! `isatty` with identical signatures.

#[cfg(unix)]
pub(crate) mod unix;
#[cfg(unix)]
pub(crate) use unix as imp;

#[cfg(windows)]
pub(crate) mod windows;
#[cfg(windows)]
pub(crate) use windows as imp;

#[cfg(not(any(unix, windows)))]
pub(crate) mod unsupported;
#[cfg(not(any(unix, windows)))]
pub(crate) use unsupported as imp;
