//! Parameter-to-query mapper.
//!
//! [`ParamMapper`] owns a schema registry and runs the whole pipeline:
//!
//! ```text
//! QueryParams ──strip──▶ StrippedParameter* ──group──▶ ParsedQueryIntent* ──build──▶ BoolQuery
//! ```
//!
//! The mapper holds no mutable state, so one instance can serve any number
//! of concurrent callers.

use paramsearch_core::{Record, SchemaRegistry};

use crate::builder::QueryBuilder;
use crate::error::Result;
use crate::grouper::{ParsedQueryIntent, group};
use crate::nodes::{BoolQuery, SearchSource};
use crate::params::QueryParams;
use crate::resolver::{ParameterResolver, StrippedParameter};
use crate::types::MapperConfig;

/// Translates query parameters into a conjunctive search query.
#[derive(Debug, Clone)]
pub struct ParamMapper {
    registry: SchemaRegistry,
    builder: QueryBuilder,
}

impl ParamMapper {
    /// Create a mapper over an existing registry with default configuration.
    pub fn new(registry: SchemaRegistry) -> Self {
        Self {
            registry,
            builder: QueryBuilder::default(),
        }
    }

    /// Create a mapper for a [`Record`] type.
    ///
    /// # Errors
    ///
    /// Fails if the record's field list is invalid (blank or repeated names).
    pub fn for_record<T: Record>() -> Result<Self> {
        Ok(Self::new(SchemaRegistry::for_record::<T>()?))
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: MapperConfig) -> Self {
        self.builder = QueryBuilder::new(config);
        self
    }

    /// The schema the mapper resolves parameters against.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// The configuration in use.
    pub fn config(&self) -> &MapperConfig {
        self.builder.config()
    }

    /// Translate parameters into a query.
    ///
    /// # Errors
    ///
    /// Returns the first resolution, grouping, or coercion error; no partial
    /// query is produced.
    pub fn convert(&self, params: &QueryParams) -> Result<BoolQuery> {
        log::debug!("Converting {} parameters", params.len());
        let intents = self.parse(params)?;
        self.builder.build(&intents)
    }

    /// Translate parameters into a search request body.
    pub fn convert_to_search_source(&self, params: &QueryParams) -> Result<SearchSource> {
        self.convert(params).map(SearchSource::new)
    }

    /// Resolve every parameter to its field.
    pub fn strip<'a>(&'a self, params: &'a QueryParams) -> Result<Vec<StrippedParameter<'a>>> {
        ParameterResolver::new(&self.registry).strip(params)
    }

    /// Resolve and group parameters into per-field intents.
    pub fn parse<'a>(&'a self, params: &'a QueryParams) -> Result<Vec<ParsedQueryIntent<'a>>> {
        group(self.strip(params)?)
    }
}

// ============================================================================
// Tests
// ============================================================================
