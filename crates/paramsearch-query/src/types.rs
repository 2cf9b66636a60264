//! Common types for the translation pipeline.

use serde::{Deserialize, Serialize};

/// Kind of query node a parameter turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    /// Exact match on one value (`term`) or any of several (`terms`).
    Terms,
    /// Inclusive range between optional bounds.
    Range,
    /// Analyzed single-value match.
    Match,
}

/// How the terms of an analyzed `match` query combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOperator {
    /// Any analyzed term can match.
    #[default]
    Or,
    /// All analyzed terms must match.
    And,
}

impl MatchOperator {
    /// Engine spelling of the operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOperator::Or => "OR",
            MatchOperator::And => "AND",
        }
    }
}

/// Mapper configuration.
///
/// Hosts embed this in their own configuration to adjust the shape of the
/// generated queries. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapperConfig {
    /// Name of the untokenized sub-field used for exact keyword filters.
    #[serde(default = "default_keyword_subfield")]
    pub keyword_subfield: String,

    /// Boost written on every generated query node.
    #[serde(default = "default_boost")]
    pub boost: f64,

    /// Operator for analyzed `match` queries.
    #[serde(default)]
    pub match_operator: MatchOperator,
}

fn default_keyword_subfield() -> String {
    "keyword".to_string()
}

fn default_boost() -> f64 {
    1.0
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            keyword_subfield: default_keyword_subfield(),
            boost: default_boost(),
            match_operator: MatchOperator::default(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
