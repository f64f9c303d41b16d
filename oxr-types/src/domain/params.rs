//! Query parameter building.

use std::fmt;

use crate::error::ValidationError;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Bool(bool),
    Number(f64),
}

impl ParamValue {
    /// Renders the value for the query string. Booleans go out as `1` / `0`.
    pub fn to_query_value(&self) -> String {
        match self {
            ParamValue::Text(s) => s.clone(),
            ParamValue::Bool(true) => "1".to_string(),
            ParamValue::Bool(false) => "0".to_string(),
            ParamValue::Number(n) => n.to_string(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_value())
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<f64> for ParamValue {
    fn from(n: f64) -> Self {
        ParamValue::Number(n)
    }
}

/// Ordered parameter map. Re-inserting a key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(String, ParamValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`QueryParams::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merges `other` into `self`, keeping existing positions for shared keys.
    pub fn extend(&mut self, other: QueryParams) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }
}

/// One or more currency codes for the `symbols` parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Symbols(Vec<String>);

impl Symbols {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for Symbols {
    fn from(s: &str) -> Self {
        Symbols(vec![s.to_string()])
    }
}

impl From<String> for Symbols {
    fn from(s: String) -> Self {
        Symbols(vec![s])
    }
}

impl From<Vec<String>> for Symbols {
    fn from(v: Vec<String>) -> Self {
        Symbols(v)
    }
}

impl From<Vec<&str>> for Symbols {
    fn from(v: Vec<&str>) -> Self {
        Symbols(v.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for Symbols {
    fn from(v: &[&str]) -> Self {
        Symbols(v.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Symbols {
    fn from(v: [&str; N]) -> Self {
        Symbols(v.iter().map(|s| s.to_string()).collect())
    }
}

/// Builds the `symbols` parameter: comma-joined in the given order,
/// or no parameter at all when the list is empty.
pub fn format_currencies(currencies: impl Into<Symbols>) -> QueryParams {
    let symbols = currencies.into();
    let mut params = QueryParams::new();
    if !symbols.is_empty() {
        params.insert("symbols", symbols.0.join(","));
    }
    params
}

/// Checks a currency code destined for a URL path segment.
pub fn validate_currency_code(code: &str) -> Result<&str, ValidationError> {
    if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidCurrency(code.to_string()));
    }
    Ok(code)
}
