//! Query tree produced by the mapper.
//!
//! The tree is engine-neutral in structure, but serializes to the
//! Elasticsearch query DSL so it can be sent as a search body unchanged:
//!
//! ```json
//! {
//!   "bool": {
//!     "must": [
//!       { "range": { "birthDate": { "from": "2020-12-31", "to": null,
//!                                   "include_lower": true, "include_upper": true,
//!                                   "boost": 1.0 } } },
//!       { "term":  { "age": { "value": "12", "boost": 1.0 } } },
//!       { "terms": { "label.keyword": ["Foo", "Bar"], "boost": 1.0 } }
//!     ],
//!     "adjust_pure_negative": true,
//!     "boost": 1.0
//!   }
//! }
//! ```

use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

use crate::types::{MatchOperator, QueryKind};

/// Coerced value of a range bound.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeValue {
    /// Numeric bound, serialized as a JSON number.
    Number(f64),
    /// Date or plain string bound, passed through verbatim.
    Text(String),
}

impl RangeValue {
    fn to_json(&self) -> Value {
        match self {
            RangeValue::Number(n) => json!(n),
            RangeValue::Text(s) => json!(s),
        }
    }
}

/// Exact match of a single value.
#[derive(Debug, Clone, PartialEq)]
pub struct TermQuery {
    /// Target field (the keyword sub-field for keyword fields).
    pub field: String,
    /// Value to match.
    pub value: String,
    /// Score boost.
    pub boost: f64,
}

/// Exact match of any of several values.
#[derive(Debug, Clone, PartialEq)]
pub struct TermsQuery {
    /// Target field (the keyword sub-field for keyword fields).
    pub field: String,
    /// Values to match, in supplied order, duplicates kept.
    pub values: Vec<String>,
    /// Score boost.
    pub boost: f64,
}

/// Range between optional bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeQuery {
    /// Target field.
    pub field: String,
    /// Lower bound.
    pub from: Option<RangeValue>,
    /// Upper bound.
    pub to: Option<RangeValue>,
    /// Whether the lower bound is inclusive.
    pub include_lower: bool,
    /// Whether the upper bound is inclusive.
    pub include_upper: bool,
    /// Score boost.
    pub boost: f64,
}

impl RangeQuery {
    /// Inclusive range on `field` with no bounds set yet.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            from: None,
            to: None,
            include_lower: true,
            include_upper: true,
            boost: 1.0,
        }
    }

    /// Whether neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Analyzed full-text match on a single value.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchQuery {
    /// Target field.
    pub field: String,
    /// Query text, verbatim.
    pub query: String,
    /// How analyzed terms combine.
    pub operator: MatchOperator,
    /// Score boost.
    pub boost: f64,
}

/// One clause of the conjunctive query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryNode {
    /// `term` clause.
    Term(TermQuery),
    /// `terms` clause.
    Terms(TermsQuery),
    /// `range` clause.
    Range(RangeQuery),
    /// `match` clause.
    Match(MatchQuery),
}

impl QueryNode {
    /// Field the clause targets, as it will be sent to the engine.
    pub fn field(&self) -> &str {
        match self {
            QueryNode::Term(q) => &q.field,
            QueryNode::Terms(q) => &q.field,
            QueryNode::Range(q) => &q.field,
            QueryNode::Match(q) => &q.field,
        }
    }

    /// Query kind of the clause; `term` and `terms` are both [`QueryKind::Terms`].
    pub fn kind(&self) -> QueryKind {
        match self {
            QueryNode::Term(_) | QueryNode::Terms(_) => QueryKind::Terms,
            QueryNode::Range(_) => QueryKind::Range,
            QueryNode::Match(_) => QueryKind::Match,
        }
    }

    /// Engine name of the clause.
    pub fn query_type(&self) -> &'static str {
        match self {
            QueryNode::Term(_) => "term",
            QueryNode::Terms(_) => "terms",
            QueryNode::Range(_) => "range",
            QueryNode::Match(_) => "match",
        }
    }

    /// Engine DSL representation of the clause.
    pub fn to_json(&self) -> Value {
        match self {
            QueryNode::Term(q) => json!({
                "term": {
                    q.field.as_str(): { "value": q.value, "boost": q.boost }
                }
            }),
            QueryNode::Terms(q) => {
                // Field goes in after `boost` so a field named `boost` keeps its values.
                let mut body = Map::new();
                body.insert("boost".to_string(), json!(q.boost));
                body.insert(q.field.clone(), json!(q.values));
                json!({ "terms": body })
            }
            QueryNode::Range(q) => json!({
                "range": {
                    q.field.as_str(): {
                        "from": q.from.as_ref().map(RangeValue::to_json),
                        "to": q.to.as_ref().map(RangeValue::to_json),
                        "include_lower": q.include_lower,
                        "include_upper": q.include_upper,
                        "boost": q.boost
                    }
                }
            }),
            QueryNode::Match(q) => json!({
                "match": {
                    q.field.as_str(): {
                        "query": q.query,
                        "operator": q.operator.as_str(),
                        "prefix_length": 0,
                        "max_expansions": 50,
                        "fuzzy_transpositions": true,
                        "lenient": false,
                        "zero_terms_query": "NONE",
                        "auto_generate_synonyms_phrase_query": true,
                        "boost": q.boost
                    }
                }
            }),
        }
    }
}

/// Conjunction of clauses: every clause must match.
#[derive(Debug, Clone, PartialEq)]
pub struct BoolQuery {
    must: Vec<QueryNode>,
    /// Score boost of the whole query.
    pub boost: f64,
}

impl Default for BoolQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl BoolQuery {
    /// Empty conjunction, which matches every document.
    pub fn new() -> Self {
        Self {
            must: Vec::new(),
            boost: 1.0,
        }
    }

    /// Add a mandatory clause.
    pub fn must(mut self, node: QueryNode) -> Self {
        self.must.push(node);
        self
    }

    /// Mandatory clauses in order.
    pub fn clauses(&self) -> &[QueryNode] {
        &self.must
    }

    /// Number of clauses.
    pub fn len(&self) -> usize {
        self.must.len()
    }

    /// Whether there are no clauses.
    pub fn is_empty(&self) -> bool {
        self.must.is_empty()
    }

    /// Iterate over the clauses.
    pub fn iter(&self) -> std::slice::Iter<'_, QueryNode> {
        self.must.iter()
    }

    /// Engine DSL representation of the query.
    pub fn to_json(&self) -> Value {
        let must: Vec<Value> = self.must.iter().map(QueryNode::to_json).collect();
        json!({
            "bool": {
                "must": must,
                "adjust_pure_negative": true,
                "boost": self.boost
            }
        })
    }
}

impl FromIterator<QueryNode> for BoolQuery {
    fn from_iter<T: IntoIterator<Item = QueryNode>>(iter: T) -> Self {
        iter.into_iter().fold(Self::new(), Self::must)
    }
}

impl<'a> IntoIterator for &'a BoolQuery {
    type Item = &'a QueryNode;
    type IntoIter = std::slice::Iter<'a, QueryNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A search request body wrapping a query.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSource {
    /// The query to run.
    pub query: BoolQuery,
}

impl SearchSource {
    /// Wrap a query.
    pub fn new(query: BoolQuery) -> Self {
        Self { query }
    }

    /// Engine DSL representation of the request body.
    pub fn to_json(&self) -> Value {
        json!({ "query": self.query.to_json() })
    }
}

impl From<BoolQuery> for SearchSource {
    fn from(query: BoolQuery) -> Self {
        Self::new(query)
    }
}

macro_rules! serialize_via_json {
    ($($ty:ty),+) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    self.to_json().serialize(serializer)
                }
            }
        )+
    };
}

serialize_via_json!(QueryNode, BoolQuery, SearchSource);

// ============================================================================
// Tests
// ============================================================================
