//! Grouping and validation of stripped parameters.
//!
//! Parameters are grouped by the field they resolved to. A field may be
//! targeted by one parameter, or by exactly one `from` and one `to`
//! parameter which merge into a single range. Anything else is ambiguous.

use indexmap::IndexMap;
use paramsearch_core::FieldDescriptor;

use crate::error::{Error, Result};
use crate::resolver::StrippedParameter;
use crate::suffix::SuffixKind;
use crate::types::QueryKind;

/// One validated unit of query intent for a single field.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQueryIntent<'a> {
    /// Field the intent applies to.
    pub field: &'a FieldDescriptor,
    /// All values of the contributing parameters, in supplied order.
    pub values: Vec<&'a str>,
    /// Inclusive lower bound for range intents.
    pub lower_bound: Option<&'a str>,
    /// Inclusive upper bound for range intents.
    pub upper_bound: Option<&'a str>,
    /// Query kind to emit.
    pub query_kind: QueryKind,
}

impl<'a> ParsedQueryIntent<'a> {
    /// Declared name of the target field.
    pub fn field_name(&self) -> &'a str {
        self.field.name()
    }

    /// A range intent with the given bounds.
    pub fn range(
        field: &'a FieldDescriptor,
        lower_bound: Option<&'a str>,
        upper_bound: Option<&'a str>,
    ) -> Self {
        Self {
            field,
            values: lower_bound.into_iter().chain(upper_bound).collect(),
            lower_bound,
            upper_bound,
            query_kind: QueryKind::Range,
        }
    }
}

/// Group stripped parameters by field and validate each group.
///
/// Output order is the order in which each field was first referenced.
///
/// # Errors
///
/// - [`Error::DuplicateProperty`] for three or more parameters on one field,
///   or two that are not one `from` plus one `to`
/// - [`Error::MalformedRange`] when a range bound carries more than one value
pub fn group<'a>(stripped: Vec<StrippedParameter<'a>>) -> Result<Vec<ParsedQueryIntent<'a>>> {
    let mut groups: IndexMap<&'a str, Vec<StrippedParameter<'a>>> = IndexMap::new();
    for param in stripped {
        groups.entry(param.field.name()).or_default().push(param);
    }

    log::debug!("Grouped parameters into {} field intents", groups.len());
    groups
        .into_iter()
        .map(|(field, members)| match members.as_slice() {
            [single] => single_intent(single),
            [first, second] => range_pair(first, second),
            _ => Err(Error::DuplicateProperty {
                field: field.to_string(),
                count: members.len(),
            }),
        })
        .collect()
}

fn single_intent<'a>(param: &StrippedParameter<'a>) -> Result<ParsedQueryIntent<'a>> {
    match param.suffix {
        SuffixKind::From => Ok(ParsedQueryIntent::range(
            param.field,
            Some(single_bound(param)?),
            None,
        )),
        SuffixKind::To => Ok(ParsedQueryIntent::range(
            param.field,
            None,
            Some(single_bound(param)?),
        )),
        SuffixKind::Match | SuffixKind::None => Ok(ParsedQueryIntent {
            field: param.field,
            values: param.values.iter().map(String::as_str).collect(),
            lower_bound: None,
            upper_bound: None,
            query_kind: param.query_kind(),
        }),
    }
}

fn range_pair<'a>(
    first: &StrippedParameter<'a>,
    second: &StrippedParameter<'a>,
) -> Result<ParsedQueryIntent<'a>> {
    let (lower, upper) = match (first.suffix, second.suffix) {
        (SuffixKind::From, SuffixKind::To) => (first, second),
        (SuffixKind::To, SuffixKind::From) => (second, first),
        _ => {
            return Err(Error::DuplicateProperty {
                field: first.field_name().to_string(),
                count: 2,
            });
        }
    };

    Ok(ParsedQueryIntent::range(
        first.field,
        Some(single_bound(lower)?),
        Some(single_bound(upper)?),
    ))
}

fn single_bound<'a>(param: &StrippedParameter<'a>) -> Result<&'a str> {
    match param.values {
        [value] => Ok(value.as_str()),
        values => Err(Error::MalformedRange {
            field: param.field_name().to_string(),
            parameter: param.parameter.to_string(),
            count: values.len(),
        }),
    }
}

// ============================================================================
// Tests
// ============================================================================
