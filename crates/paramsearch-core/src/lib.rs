//! Paramsearch Core: schema registry and field classification.
//!
//! This crate provides the schema side of paramsearch: which fields a record
//! declares and what kind of values each one holds. It has no internal
//! paramsearch dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`types`]: [`FieldDescriptor`] and [`SemanticType`]
//! - [`kind`]: [`FieldKind`] / [`Record`] traits and the [`record_schema!`] macro
//! - [`registry`]: [`SchemaRegistry`] lookup table
//! - [`definition`]: TOML/JSON schema description files

#![doc = include_str!("../README.md")]

pub mod definition;
pub mod error;
pub mod kind;
pub mod registry;
pub mod types;

// Re-export key types at crate root for convenience
pub use definition::{FieldDefinition, SchemaDefinition};
pub use error::{Error, Result};
pub use kind::{FieldKind, Record};
pub use registry::SchemaRegistry;
pub use types::{FieldDescriptor, SemanticType};
