use crate::probe::RawFd;

/// Why the terminal width could not be determined.
///
/// The regular queries never return this; they fold every failure into
/// "unknown". It is only surfaced by [`try_console_width`](crate::try_console_width)
/// for callers who want to report the reason.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The OS call itself failed, usually because the descriptor is not a
    /// terminal (`ENOTTY`) or is closed (`EBADF`).
    #[error("terminal query on fd {fd} failed: {source}")]
    Os {
        fd: RawFd,
        #[source]
        source: std::io::Error,
    },

    /// Standard error is not attached to a console screen buffer.
    #[error("stderr is not attached to a console")]
    NoConsole,

    /// The call succeeded but reported a window zero columns wide, which
    /// happens on a pseudo-terminal nobody has sized yet.
    #[error("terminal reported zero columns")]
    ZeroColumns,

    /// This platform has no terminal API to ask.
    #[error("terminal queries are not supported on this platform")]
    Unsupported,
}

/// Convenience Result type for probe diagnostics.
pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_error_mentions_fd_and_cause() {
        let err = ProbeError::Os {
            fd: 2,
            source: std::io::Error::other("bad file descriptor"),
        };
        let msg = err.to_string();
        assert!(msg.contains("fd 2"), "got: {msg}");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_unit_variants_have_messages() {
        assert_eq!(
            ProbeError::NoConsole.to_string(),
            "stderr is not attached to a console"
        );
        assert_eq!(
            ProbeError::ZeroColumns.to_string(),
            "terminal reported zero columns"
        );
        assert!(ProbeError::Unsupported.to_string().contains("not supported"));
    }
}
