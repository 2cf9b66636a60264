//! Query construction from validated intents.
//!
//! Each [`ParsedQueryIntent`] becomes exactly one clause; all clauses are
//! combined into a single [`BoolQuery`] where every clause is mandatory.

use chrono::NaiveDate;
use paramsearch_core::SemanticType;

use crate::error::{Error, Result};
use crate::grouper::ParsedQueryIntent;
use crate::nodes::{BoolQuery, MatchQuery, QueryNode, RangeQuery, RangeValue, TermQuery, TermsQuery};
use crate::types::{MapperConfig, QueryKind};

/// `chrono` format temporal range bounds must satisfy.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Human-readable form of [`DATE_FORMAT`] used in error messages.
pub const DATE_FORMAT_DISPLAY: &str = "yyyy-MM-dd";

/// Builds query clauses from parsed intents.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    config: MapperConfig,
}

impl QueryBuilder {
    /// Create a builder with the given configuration.
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Build the conjunctive query for a list of intents.
    ///
    /// # Errors
    ///
    /// Fails on the first intent that cannot be turned into a clause; see
    /// [`QueryBuilder::build_node`].
    pub fn build(&self, intents: &[ParsedQueryIntent<'_>]) -> Result<BoolQuery> {
        let mut query = BoolQuery::new();
        query.boost = self.config.boost;
        for intent in intents {
            query = query.must(self.build_node(intent)?);
        }
        log::debug!("Built conjunctive query with {} clauses", query.len());
        Ok(query)
    }

    /// Build the clause for one intent.
    ///
    /// # Errors
    ///
    /// - [`Error::AmbiguousMatch`] for a match intent with several values
    /// - [`Error::InvalidNumber`] / [`Error::InvalidDate`] for range bounds
    ///   that do not fit the field's semantic type
    /// - [`Error::MissingValue`] for a terms or match intent without values
    pub fn build_node(&self, intent: &ParsedQueryIntent<'_>) -> Result<QueryNode> {
        match intent.query_kind {
            QueryKind::Match => self.match_query(intent),
            QueryKind::Terms => self.terms_query(intent),
            QueryKind::Range => self.range_query(intent),
        }
    }

    fn match_query(&self, intent: &ParsedQueryIntent<'_>) -> Result<QueryNode> {
        let query = match intent.values.as_slice() {
            [value] => value.to_string(),
            [] => return Err(missing_value(intent)),
            values => {
                return Err(Error::AmbiguousMatch {
                    field: intent.field_name().to_string(),
                    count: values.len(),
                });
            }
        };

        Ok(QueryNode::Match(MatchQuery {
            field: intent.field_name().to_string(),
            query,
            operator: self.config.match_operator,
            boost: self.config.boost,
        }))
    }

    fn terms_query(&self, intent: &ParsedQueryIntent<'_>) -> Result<QueryNode> {
        let field = if intent.field.is_keyword() {
            format!("{}.{}", intent.field_name(), self.config.keyword_subfield)
        } else {
            intent.field_name().to_string()
        };

        match intent.values.as_slice() {
            [] => Err(missing_value(intent)),
            [value] => Ok(QueryNode::Term(TermQuery {
                field,
                value: value.to_string(),
                boost: self.config.boost,
            })),
            values => Ok(QueryNode::Terms(TermsQuery {
                field,
                values: values.iter().map(|v| v.to_string()).collect(),
                boost: self.config.boost,
            })),
        }
    }

    fn range_query(&self, intent: &ParsedQueryIntent<'_>) -> Result<QueryNode> {
        let semantic_type = intent.field.semantic_type();
        let field = intent.field_name();

        let mut range = RangeQuery::new(field);
        range.boost = self.config.boost;
        range.from = intent
            .lower_bound
            .map(|bound| coerce_bound(field, semantic_type, bound))
            .transpose()?;
        range.to = intent
            .upper_bound
            .map(|bound| coerce_bound(field, semantic_type, bound))
            .transpose()?;

        if range.is_unbounded() {
            log::debug!("Range on {field} has no bounds");
        }
        Ok(QueryNode::Range(range))
    }
}

/// Coerce a raw range bound according to the field's semantic type.
///
/// Numbers become [`RangeValue::Number`]; dates are validated but keep their
/// original spelling; anything else passes through unchanged.
pub fn coerce_bound(field: &str, semantic_type: SemanticType, raw: &str) -> Result<RangeValue> {
    match semantic_type {
        SemanticType::Number => parse_number(raw)
            .map(RangeValue::Number)
            .ok_or_else(|| Error::InvalidNumber {
                field: field.to_string(),
                value: raw.to_string(),
            }),
        SemanticType::Temporal => {
            if is_calendar_date(raw) {
                Ok(RangeValue::Text(raw.to_string()))
            } else {
                Err(Error::InvalidDate {
                    field: field.to_string(),
                    value: raw.to_string(),
                })
            }
        }
        SemanticType::Keyword | SemanticType::Other => Ok(RangeValue::Text(raw.to_string())),
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Whether `raw` is a valid `yyyy-MM-dd` date with a four-digit year.
fn is_calendar_date(raw: &str) -> bool {
    let shape_ok = raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    shape_ok && NaiveDate::parse_from_str(raw, DATE_FORMAT).is_ok()
}

fn missing_value(intent: &ParsedQueryIntent<'_>) -> Error {
    Error::MissingValue {
        parameter: intent.field_name().to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
