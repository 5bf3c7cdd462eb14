//! Domain-specific error types for lifepath

use thiserror::Error;

/// Main error type for the lifepath engine and its CLI host.
///
/// The analysis engine itself is total over well-typed input; errors only
/// arise at the edges (config loading, answer-file I/O, serialization).
#[derive(Error, Debug)]
pub enum LifepathError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Well-formed but semantically invalid configuration (bad weights,
    /// wrong template count)
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl From<serde_json::Error> for LifepathError {
    fn from(err: serde_json::Error) -> Self {
        LifepathError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for LifepathError {
    fn from(err: toml::de::Error) -> Self {
        LifepathError::Config {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for LifepathError {
    fn from(err: std::io::Error) -> Self {
        LifepathError::Storage {
            message: err.to_string(),
        }
    }
}

/// Result type alias for lifepath operations
pub type Result<T> = std::result::Result<T, LifepathError>;
