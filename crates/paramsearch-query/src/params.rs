//! Incoming query parameters.
//!
//! [`QueryParams`] is an ordered multimap from parameter name to the values
//! supplied for it. Key order is the order of first insertion, which is also
//! the order of the clauses in the generated query.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Ordered mapping from parameter name to one or more values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams {
    params: IndexMap<String, Vec<String>>,
}

impl QueryParams {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an `application/x-www-form-urlencoded` query string.
    ///
    /// Repeated keys collect their values in order: `label=Foo&label=Bar`
    /// yields `label → ["Foo", "Bar"]`. A leading `?` is ignored.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::new();
        for (name, value) in form_urlencoded::parse(query.as_bytes()) {
            params.append(name, value);
        }
        params
    }

    /// Add one value to a parameter, creating it if needed.
    pub fn append<'a>(&mut self, name: impl Into<Cow<'a, str>>, value: impl Into<Cow<'a, str>>) {
        let name = name.into();
        let value = value.into().into_owned();
        match self.params.get_mut(name.as_ref()) {
            Some(values) => values.push(value),
            None => {
                self.params.insert(name.into_owned(), vec![value]);
            }
        }
    }

    /// Set all values of a parameter, replacing earlier ones.
    ///
    /// A replaced parameter keeps its original position.
    pub fn insert<N, I, V>(&mut self, name: N, values: I)
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.params
            .insert(name.into(), values.into_iter().map(Into::into).collect());
    }

    /// Values of a parameter, if present.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.params.get(name).map(Vec::as_slice)
    }

    /// Number of distinct parameter names.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether no parameters were supplied.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over `(name, values)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.params
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}

impl<N, I, V> FromIterator<(N, I)> for QueryParams
where
    N: Into<String>,
    I: IntoIterator<Item = V>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, I)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (name, values) in iter {
            let values = values.into_iter().map(Into::into);
            params.params.entry(name.into()).or_default().extend(values);
        }
        params
    }
}

impl<N, I, V, const LEN: usize> From<[(N, I); LEN]> for QueryParams
where
    N: Into<String>,
    I: IntoIterator<Item = V>,
    V: Into<String>,
{
    fn from(pairs: [(N, I); LEN]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<IndexMap<String, Vec<String>>> for QueryParams {
    fn from(params: IndexMap<String, Vec<String>>) -> Self {
        Self { params }
    }
}

// ============================================================================
// Tests
// ============================================================================
