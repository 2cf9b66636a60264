//! Parameter resolution against the schema.
//!
//! Each raw parameter name is looked up verbatim first, so fields whose
//! names happen to end in `from`, `to` or `match` stay reachable. Only when
//! that fails is the suffix stripped and the base name looked up.

use paramsearch_core::{FieldDescriptor, SchemaRegistry};

use crate::error::{Error, Result};
use crate::params::QueryParams;
use crate::suffix::{SuffixKind, classify};
use crate::types::QueryKind;

/// A raw parameter after suffix analysis and field resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct StrippedParameter<'a> {
    /// Parameter name as supplied.
    pub parameter: &'a str,
    /// Field the parameter resolved to.
    pub field: &'a FieldDescriptor,
    /// Values in the order they were supplied.
    pub values: &'a [String],
    /// Suffix that selected the field, `None` for a verbatim match.
    pub suffix: SuffixKind,
}

impl StrippedParameter<'_> {
    /// Declared name of the resolved field; the grouping key.
    pub fn field_name(&self) -> &str {
        self.field.name()
    }

    /// Query kind this parameter asks for.
    pub fn query_kind(&self) -> QueryKind {
        self.suffix.query_kind()
    }
}

/// Resolves raw parameter names to schema fields.
#[derive(Debug, Clone, Copy)]
pub struct ParameterResolver<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> ParameterResolver<'a> {
    /// Create a resolver over a schema.
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Resolve one raw name to its field and effective suffix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParameter`] when neither the raw name nor its
    /// suffix-stripped base name is a declared field.
    pub fn resolve(&self, raw: &str) -> Result<(&'a FieldDescriptor, SuffixKind)> {
        if let Some(field) = self.registry.get(raw) {
            return Ok((field, SuffixKind::None));
        }

        let (suffix, base) = classify(raw);
        if suffix != SuffixKind::None
            && let Some(field) = self.registry.get(base)
        {
            return Ok((field, suffix));
        }

        Err(Error::UnknownParameter {
            parameter: raw.to_string(),
        })
    }

    /// Resolve every parameter, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingValue`] for a parameter with an empty value list
    /// - [`Error::UnknownParameter`] for a name that resolves to no field
    pub fn strip(&self, params: &'a QueryParams) -> Result<Vec<StrippedParameter<'a>>> {
        params
            .iter()
            .map(|(parameter, values)| {
                if values.is_empty() {
                    return Err(Error::MissingValue {
                        parameter: parameter.to_string(),
                    });
                }
                let (field, suffix) = self.resolve(parameter)?;
                log::trace!(
                    "Resolved parameter {parameter} to field {} ({suffix:?})",
                    field.name()
                );
                Ok(StrippedParameter {
                    parameter,
                    field,
                    values,
                    suffix,
                })
            })
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
