//! Schema registry: name → field descriptor lookup.
//!
//! A [`SchemaRegistry`] is built exactly once per record type and then shared
//! read-only across any number of translation calls. All type classification
//! happens at construction; lookups are plain map reads.

use std::path::Path;

use indexmap::IndexMap;

use crate::definition::SchemaDefinition;
use crate::error::{Error, Result};
use crate::kind::Record;
use crate::types::FieldDescriptor;

/// Lookup table from declared field name to its descriptor.
///
/// Fields keep their declaration order for listing purposes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaRegistry {
    fields: IndexMap<String, FieldDescriptor>,
}

impl SchemaRegistry {
    /// Build a registry from the declared fields of a [`Record`] type.
    ///
    /// # Errors
    ///
    /// Returns an error if the record declares a blank or repeated field name.
    pub fn for_record<T: Record>() -> Result<Self> {
        Self::from_fields(T::fields())
    }

    /// Build a registry from an explicit list of descriptors.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyFieldName`] if any name is blank
    /// - [`Error::DuplicateField`] if a name appears twice
    pub fn from_fields<I>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = FieldDescriptor>,
    {
        let mut table = IndexMap::new();
        for field in fields {
            if field.name().trim().is_empty() {
                return Err(Error::EmptyFieldName);
            }
            if table.contains_key(field.name()) {
                return Err(Error::DuplicateField {
                    name: field.name().to_string(),
                });
            }
            table.insert(field.name().to_string(), field);
        }
        log::debug!("Built schema registry with {} fields", table.len());
        Ok(Self { fields: table })
    }

    /// Build a registry from a parsed schema description.
    pub fn from_definition(definition: SchemaDefinition) -> Result<Self> {
        Self::from_fields(definition.into_descriptors())
    }

    /// Parse a TOML schema description.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_definition(SchemaDefinition::from_toml_str(content)?)
    }

    /// Parse a JSON schema description.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_definition(SchemaDefinition::from_json_str(content)?)
    }

    /// Load a schema description file.
    ///
    /// Files ending in `.json` are read as JSON, everything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_definition(SchemaDefinition::load(path)?)
    }

    /// Look up a field, failing if it is not declared.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldNotFound`] for an undeclared name.
    pub fn describe(&self, name: &str) -> Result<&FieldDescriptor> {
        self.get(name).ok_or_else(|| Error::field_not_found(name))
    }

    /// Look up a field by exact name.
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }

    /// Whether a field with this exact name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over descriptors in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values()
    }

    /// Iterate over field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

// ============================================================================
// Tests
// ============================================================================
