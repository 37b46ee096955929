//! Provider response wrapper
//!
//! Responses are passed through unmodified. The helpers here only read the
//! provider's conventional envelope (`code`, `message`, `data`) and never
//! change the underlying object.

use crate::error::{ProviderError, SUCCESS_CODE};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::Deref;

/// JSON object returned by the provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiResponse(Map<String, Value>);

impl ApiResponse {
    pub fn new(body: Map<String, Value>) -> Self {
        Self(body)
    }

    /// Provider response code, if present as a string
    pub fn code(&self) -> Option<&str> {
        self.0.get("code").and_then(Value::as_str)
    }

    /// Provider message, if present
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    /// Payload under `data`, if present
    pub fn data(&self) -> Option<&Value> {
        self.0.get("data")
    }

    /// Whether the provider reported success
    pub fn is_success(&self) -> bool {
        self.code() == Some(SUCCESS_CODE)
    }

    /// Classify the response
    ///
    /// Returns the `data` payload (or `null` when absent) on success, and a
    /// [`ProviderError`] carrying the provider code and message otherwise.
    /// A response with no `code` field is treated as a failure with an
    /// empty code.
    pub fn into_result(mut self) -> Result<Value, ProviderError> {
        if self.is_success() {
            return Ok(self.0.remove("data").unwrap_or(Value::Null));
        }

        Err(ProviderError::new(
            self.code().unwrap_or_default(),
            self.message().unwrap_or_default(),
        ))
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Convert into a plain [`Value::Object`]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl Deref for ApiResponse {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Map<String, Value>> for ApiResponse {
    fn from(body: Map<String, Value>) -> Self {
        Self(body)
    }
}

impl From<ApiResponse> for Value {
    fn from(response: ApiResponse) -> Self {
        response.into_value()
    }
}
