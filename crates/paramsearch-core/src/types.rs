//! Field descriptor and semantic type definitions.
//!
//! A [`FieldDescriptor`] is the only thing the query pipeline needs to know
//! about a record field: its wire name, its [`SemanticType`], and whether it
//! was declared nullable. Nullability is informational; coercion treats
//! `Option<T>` exactly like `T`.

use serde::{Deserialize, Serialize};

use crate::kind::FieldKind;

/// Classification of a field's value domain.
///
/// Chooses both the query shape (keyword sub-field for exact string filters)
/// and how range bounds are coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    /// Textual field, indexed with an untokenized keyword sub-field.
    #[serde(alias = "string", alias = "text")]
    Keyword,
    /// Any integer or floating-point representation.
    Number,
    /// Any date or time representation.
    Temporal,
    /// Everything else (booleans, collections, nested records).
    #[default]
    Other,
}

impl SemanticType {
    /// Lowercase name used in schema files and diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticType::Keyword => "keyword",
            SemanticType::Number => "number",
            SemanticType::Temporal => "temporal",
            SemanticType::Other => "other",
        }
    }
}

impl std::fmt::Display for SemanticType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for one declared field of a record schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldDescriptor {
    name: String,
    semantic_type: SemanticType,
    nullable: bool,
}

impl FieldDescriptor {
    /// Create a descriptor from its parts.
    pub fn new(name: impl Into<String>, semantic_type: SemanticType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            semantic_type,
            nullable,
        }
    }

    /// Create a descriptor whose type information comes from a Rust type.
    ///
    /// `Option<T>` yields the same semantic type as `T` with `nullable` set.
    pub fn of<T: FieldKind + ?Sized>(name: impl Into<String>) -> Self {
        Self::new(name, T::SEMANTIC_TYPE, T::NULLABLE)
    }

    /// Declared field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Semantic type of the field.
    pub fn semantic_type(&self) -> SemanticType {
        self.semantic_type
    }

    /// Whether the field was declared optional.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Whether exact-match filters on this field go to its keyword sub-field.
    pub fn is_keyword(&self) -> bool {
        self.semantic_type == SemanticType::Keyword
    }
}

// ============================================================================
// Tests
// ============================================================================
