//! Error types for corpus preparation and MALLET invocation.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors raised by the converter, trainer, and line numberer.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The external executable could not be started at all.
    ///
    /// Usually the binary is missing from `PATH` or lacks execute permission.
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        /// Program name or path that was executed
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external tool ran but reported failure while strict mode was on.
    #[error("`{program}` exited unsuccessfully ({status})")]
    ToolFailed {
        /// Program name or path that was executed
        program: String,
        /// Exit status reported by the operating system
        status: ExitStatus,
    },

    /// The training output directory could not be created.
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A corpus file could not be read (including invalid UTF-8).
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A corpus file could not be written back.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for pipeline results
pub type PipelineResult<T> = Result<T, PipelineError>;
