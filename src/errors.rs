//! Error types for review configuration.
//!
//! The analysis operations themselves are total; only shaping loosely typed
//! configuration into typed records can fail.

use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A mapping could not be shaped into its typed record, for example a
    /// checklist given as a scalar instead of a list of strings.
    #[error("malformed {section} configuration: {message}")]
    Malformed { section: String, message: String },

    /// A rating scale maximum below 1.
    #[error("{field} must be at least 1, got {value}")]
    InvalidScale { field: &'static str, value: u32 },

    /// Reading a configuration file failed.
    #[error("failed to read config: {path}: {message}")]
    Io { path: String, message: String },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
