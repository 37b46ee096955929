//! Request parameters
//!
//! Parameters are kept in a [`BTreeMap`], so keys are unique and always
//! serialized in sorted order. Signatures are computed over that exact
//! serialization, which makes them reproducible.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Ordered key-value parameters for a single request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params {
    inner: BTreeMap<String, Value>,
}

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    ///
    /// ```
    /// use opay_types::Params;
    ///
    /// let params = Params::new()
    ///     .with("reference", "TXN123")
    ///     .with("amount", "500");
    /// assert_eq!(params.to_json().unwrap(), r#"{"amount":"500","reference":"TXN123"}"#);
    /// ```
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, returning the previous value for the key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.inner.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.inner.remove(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.inner.iter()
    }

    /// Compact JSON object with keys in sorted order
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.inner)
    }

    /// Flatten into query pairs in key order
    ///
    /// Strings are passed verbatim; every other value is rendered as JSON
    /// text (`true`, `42`, `null`, `{"a":1}`).
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.inner
            .iter()
            .map(|(k, v)| {
                let value = match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (k.clone(), value)
            })
            .collect()
    }

    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.inner
    }
}

impl From<BTreeMap<String, Value>> for Params {
    fn from(inner: BTreeMap<String, Value>) -> Self {
        Self { inner }
    }
}

impl From<serde_json::Map<String, Value>> for Params {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
