//! Error types for paramsearch-cli

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for paramsearch-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in paramsearch-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from paramsearch-core
    #[error("Core error: {0}")]
    Core(#[from] paramsearch_core::Error),

    /// Error from paramsearch-query
    #[error("Query error: {0}")]
    Query(#[from] paramsearch_query::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error on a config file
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON output could not be rendered
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
