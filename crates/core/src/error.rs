//! Error types for instep-core

use std::path::PathBuf;

use thiserror::Error;

use crate::step::StepKind;

/// Errors that can occur in core operations
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required environment variable is unset or empty. Raised before
    /// any filesystem mutation is attempted.
    #[error("required environment variable {var} is not set")]
    Environment { var: &'static str },

    /// A recipe file could not be read or is not valid.
    #[error("invalid recipe '{path}': {message}")]
    Recipe { path: String, message: String },

    /// The recipe's source directory does not exist.
    #[error("source directory does not exist: {0}")]
    SourceDirMissing(PathBuf),

    /// An external build or install command exited non-zero.
    #[error("{kind} step failed for package '{package}' with exit code {code:?}")]
    Step {
        kind: StepKind,
        package: String,
        code: Option<i32>,
    },

    #[error("Platform error: {0}")]
    Platform(#[from] instep_platform::PlatformError),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// The process exit code this error maps to.
    ///
    /// A failed step propagates the wrapped tool's own exit code; every
    /// other error (and a step killed by a signal) maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            CoreError::Step {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}
