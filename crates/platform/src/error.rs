//! Error types for instep-platform

use thiserror::Error;

/// Errors that can occur in platform operations
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Failed to determine home directory")]
    NoHomeDirectory,

    #[error("Prefix subdirectory must be relative: {0}")]
    AbsoluteSubdir(String),

    #[error("Prefix subdirectory escapes the installation root: {0}")]
    EscapesPrefix(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
