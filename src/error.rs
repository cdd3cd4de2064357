//! Error Types
//!
//! Every fallible helper in this crate returns [`UtilError`]. Library code
//! never terminates the process itself; the outermost entry point turns an
//! error into an exit status with [`UtilError::exit_code`].

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, UtilError>;

/// Errors raised by the pipeline utilities.
#[derive(Error, Debug)]
pub enum UtilError {
    /// A shell command ran and exited with a non-zero status.
    #[error("CMD ended with status code {code}: {command}")]
    CommandFailed {
        /// The strict-mode command line that failed
        command: String,
        /// Exit status reported by the shell
        code: i32,
    },

    /// The shell could not be started at all.
    #[error("failed to start '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// A file could not be opened, read or updated.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The `PATH` environment variable is not set.
    #[error("PATH environment variable is not set")]
    PathUnset,

    /// A parallel batch was requested with no worker threads.
    #[error("maximum parallelism must be at least 1 (got {0})")]
    InvalidParallelism(usize),

    /// The worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    /// A worker went away before reporting its command's result.
    #[error("worker pool stopped before every command reported a result")]
    WorkerLost,
}

impl UtilError {
    /// Builds an [`UtilError::Io`] for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Exit status the calling process should terminate with.
    ///
    /// A failed command propagates its own status; everything else is a
    /// generic failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CommandFailed { code, .. } => *code,
            _ => 1,
        }
    }
}
