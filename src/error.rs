//! Error types for process reaping and graph construction.
//!
//! One enum per concern; linker and chunking errors are contract violations
//! raised before any mutation, reaper errors are environmental.

use thiserror::Error;

use crate::graph::TaskId;

/// Errors raised while terminating a process group.
#[derive(Debug, Error)]
pub enum ReapError {
    /// The root pid addresses the calling process: its own pid, or pid 0,
    /// which the kernel resolves to the caller's whole process group.
    #[error("refusing to terminate the calling process (root pid {0})")]
    SelfTermination(u32),

    /// A signal was refused for lack of privilege. Never retried.
    #[error("permission denied signaling process {pid}")]
    PermissionDenied { pid: u32 },

    /// The process table could not be read while collecting descendants.
    #[cfg(unix)]
    #[error("failed to enumerate descendants of {root}")]
    Enumerate {
        root: u32,
        #[source]
        source: psutil::Error,
    },

    /// Signal delivery failed for a reason other than a missing target or
    /// missing privilege.
    #[cfg(unix)]
    #[error("failed to signal process {pid}: {source}")]
    Signal {
        pid: u32,
        #[source]
        source: nix::errno::Errno,
    },
}

/// Errors raised while wiring task dependencies.
#[derive(Debug, Error)]
pub enum LinkError {
    /// A linker argument referenced an identity that was never registered.
    #[error("unknown task '{0}'")]
    UnknownTask(TaskId),

    /// Two adjacent chain rungs are groups of different lengths.
    #[error(
        "chain rungs {left_index} and {right_index} have mismatched lengths ({left_len} vs {right_len})"
    )]
    RungLengthMismatch {
        left_index: usize,
        right_index: usize,
        left_len: usize,
        right_len: usize,
    },
}

/// Errors raised by the chunking helpers.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Chunk size must be a positive integer.
    #[error("chunk size must be a positive integer")]
    NonPositiveChunkSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The enumerate variant wraps the table-scan error psutil returns as a
    /// whole, not the per-process one.
    #[cfg(unix)]
    #[test]
    fn test_enumerate_error_reports_root_and_source() {
        let source = psutil::Error::from(std::io::Error::other("table scan failed"));
        let err = ReapError::Enumerate { root: 42, source };

        assert!(err.to_string().contains("42"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_self_termination_names_the_root_pid() {
        let err = ReapError::SelfTermination(0);
        assert!(err.to_string().contains("root pid 0"));
    }
}
