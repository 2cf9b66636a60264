//! Error types for paramsearch-query
//!
//! Every translation error aborts the whole call; no partial query is ever
//! returned. All of them describe bad client input and map to a
//! bad-request response at the transport layer.

use thiserror::Error;

use crate::builder::DATE_FORMAT_DISPLAY;

/// Result type alias for paramsearch-query operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while translating parameters into a query
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Parameter name matches no field, verbatim or with its suffix removed
    #[error("invalid param given {parameter}")]
    UnknownParameter {
        /// Raw parameter name
        parameter: String,
    },

    /// Too many parameters resolve to one field, or two that are not a from/to pair
    #[error("duplicate properties {field}: {count} parameters resolve to the same field")]
    DuplicateProperty {
        /// Resolved field name
        field: String,
        /// How many parameters resolved to it
        count: usize,
    },

    /// A range bound received more than one value
    #[error("range bound {parameter} for {field} takes exactly one value, got {count}")]
    MalformedRange {
        /// Resolved field name
        field: String,
        /// Raw parameter carrying the bound
        parameter: String,
        /// Number of values supplied
        count: usize,
    },

    /// A match parameter received more than one value
    #[error("duplicate queries found for {field}: match takes exactly one value, got {count}")]
    AmbiguousMatch {
        /// Resolved field name
        field: String,
        /// Number of values supplied
        count: usize,
    },

    /// A numeric range bound did not parse as a finite number
    #[error("cannot parse number {value} for {field}")]
    InvalidNumber {
        /// Resolved field name
        field: String,
        /// The offending bound
        value: String,
    },

    /// A temporal range bound is not an ISO calendar date
    #[error("cannot parse date {value} for {field}, please use {format}", format = DATE_FORMAT_DISPLAY)]
    InvalidDate {
        /// Resolved field name
        field: String,
        /// The offending bound
        value: String,
    },

    /// A parameter was present with no values at all
    #[error("parameter {parameter} was given without a value")]
    MissingValue {
        /// Raw parameter name
        parameter: String,
    },

    /// Error from paramsearch-core
    #[error("Core error: {0}")]
    Core(#[from] paramsearch_core::Error),
}

impl Error {
    /// Name of the parameter or field the error is about, if any.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Error::UnknownParameter { parameter }
            | Error::MissingValue { parameter }
            | Error::MalformedRange { parameter, .. } => Some(parameter.as_str()),
            Error::DuplicateProperty { field, .. }
            | Error::AmbiguousMatch { field, .. }
            | Error::InvalidNumber { field, .. }
            | Error::InvalidDate { field, .. } => Some(field.as_str()),
            Error::Core(paramsearch_core::Error::FieldNotFound { name }) => Some(name.as_str()),
            Error::Core(_) => None,
        }
    }

    /// Whether the error was caused by the caller's parameters.
    ///
    /// Schema loading failures are server-side problems and return `false`.
    pub fn is_bad_request(&self) -> bool {
        match self {
            Error::Core(paramsearch_core::Error::FieldNotFound { .. }) => true,
            Error::Core(_) => false,
            _ => true,
        }
    }
}
