//! Error types for paramsearch-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for paramsearch-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or querying a schema registry
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The requested field is not declared by the schema
    #[error("Field not found: {name}")]
    FieldNotFound {
        /// Name that was looked up
        name: String,
    },

    /// Two fields in one schema share a name
    #[error("Duplicate field in schema: {name}")]
    DuplicateField {
        /// The repeated field name
        name: String,
    },

    /// A field was declared with a blank name
    #[error("Schema field names must not be empty")]
    EmptyFieldName,

    /// Reading a schema file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A TOML schema definition could not be parsed
    #[error("Invalid TOML schema: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A JSON schema definition could not be parsed
    #[error("Invalid JSON schema: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Creates a field-not-found error.
    pub fn field_not_found<S: Into<String>>(name: S) -> Self {
        Error::FieldNotFound { name: name.into() }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
