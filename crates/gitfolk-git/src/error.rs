//! Error types for git mining

use thiserror::Error;

/// Errors from running the `git` binary
#[derive(Debug, Error)]
pub enum GitError {
    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("git exited with status {status}: {stderr}")]
    CommandFailed { status: i32, stderr: String },

    #[error("git output was not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
