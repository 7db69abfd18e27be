//! Shell error types.

use thiserror::Error;

/// Errors from running external commands.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The command could not be started.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran and exited with a non-zero status.
    #[error("`{command}` exited with status {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: i32,
        stderr: String,
    },
}

/// Result type for shell operations.
pub type ShellResult<T> = Result<T, ShellError>;
