//! Error types for the fixture harness.

use thiserror::Error;

/// Errors that can occur while loading fixtures or harness configuration.
#[derive(Debug, Error)]
pub enum SpecError {
    /// A fixture or expected-failures file is not valid.
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    /// A file or directory could not be read.
    #[error("failed to load {path}: {message}")]
    Load { path: String, message: String },
}

/// Result type for harness operations.
pub type SpecResult<T> = Result<T, SpecError>;
