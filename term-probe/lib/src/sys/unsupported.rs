use crate::error::{ProbeError, Result};
use crate::probe::RawFd;

pub(crate) fn stderr_columns() -> Result<u16> {
    Err(ProbeError::Unsupported)
}

pub(crate) fn stderr_size() -> Option<(u16, u16)> {
    None
}

pub(crate) fn isatty(_fd: RawFd) -> bool {
    false
}
