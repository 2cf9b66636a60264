//! Schema description files.
//!
//! When a record type is not available at compile time, its schema can be
//! described in TOML or JSON:
//!
//! ```toml
//! [[fields]]
//! name = "birthDate"
//! type = "temporal"
//! nullable = true
//!
//! [[fields]]
//! name = "label"
//! type = "keyword"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{FieldDescriptor, SemanticType};

/// One field entry of a schema description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name as it appears in query parameters.
    pub name: String,

    /// Semantic type; defaults to `other`.
    #[serde(rename = "type", default)]
    pub semantic_type: SemanticType,

    /// Whether the field is optional.
    #[serde(default)]
    pub nullable: bool,
}

/// A whole schema description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    /// Declared fields, in order.
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

impl SchemaDefinition {
    /// Parse a TOML description.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a JSON description.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read a description file; `.json` files are JSON, anything else TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        log::debug!("Loading schema definition from {}", path.display());
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Convert into field descriptors.
    pub fn into_descriptors(self) -> impl Iterator<Item = FieldDescriptor> {
        self.fields
            .into_iter()
            .map(|f| FieldDescriptor::new(f.name, f.semantic_type, f.nullable))
    }
}

impl From<&FieldDescriptor> for FieldDefinition {
    fn from(field: &FieldDescriptor) -> Self {
        Self {
            name: field.name().to_string(),
            semantic_type: field.semantic_type(),
            nullable: field.is_nullable(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
