//! # paramsearch-query
//!
//! Translates flat HTTP-style query parameters into a structured boolean
//! search query, using a [`SchemaRegistry`](paramsearch_core::SchemaRegistry)
//! to resolve names and coerce values.
//!
//! # Parameter conventions
//!
//! | Parameter | Values | Clause |
//! |-----------|--------|--------|
//! | `field` | one | `term` (on `field.keyword` for keyword fields) |
//! | `field` | several | `terms` (on `field.keyword` for keyword fields) |
//! | `fieldFrom` / `fieldTo` | one each | inclusive `range`, one or both sides |
//! | `fieldMatch` | one | analyzed `match` |
//!
//! Suffixes are case-insensitive. Every clause is mandatory: the result is
//! the conjunction of all parameters.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use paramsearch_core::record_schema;
//! use paramsearch_query::{ParamMapper, QueryParams};
//!
//! #[allow(dead_code)]
//! struct Person {
//!     name: String,
//!     age: Option<i32>,
//!     birth_date: Option<NaiveDate>,
//! }
//!
//! record_schema!(Person {
//!     "name" => String,
//!     "age" => Option<i32>,
//!     "birthDate" => Option<NaiveDate>,
//! });
//!
//! let mapper = ParamMapper::for_record::<Person>()?;
//! let params = QueryParams::from_query_string("birthDateFrom=2020-12-31&nameMatch=John");
//! let query = mapper.convert(&params)?;
//!
//! assert_eq!(query.len(), 2);
//! assert_eq!(query.to_json()["bool"]["must"][1]["match"]["name"]["query"], "John");
//! # Ok::<(), paramsearch_query::Error>(())
//! ```

#![warn(clippy::all)]

pub mod builder;
pub mod error;
pub mod grouper;
pub mod mapper;
pub mod nodes;
pub mod params;
pub mod resolver;
pub mod suffix;
pub mod types;

#[cfg(test)]
mod proptests;

pub use builder::{DATE_FORMAT, DATE_FORMAT_DISPLAY, QueryBuilder};
pub use error::{Error, Result};
pub use grouper::{ParsedQueryIntent, group};
pub use mapper::ParamMapper;
pub use nodes::{
    BoolQuery, MatchQuery, QueryNode, RangeQuery, RangeValue, SearchSource, TermQuery, TermsQuery,
};
pub use params::QueryParams;
pub use resolver::{ParameterResolver, StrippedParameter};
pub use suffix::{SuffixKind, classify};
pub use types::{MapperConfig, MatchOperator, QueryKind};
