//! Provider-reported business errors

use thiserror::Error;

/// Code the provider uses for a successful call
pub const SUCCESS_CODE: &str = "00000";

/// Failure reported by the provider inside an otherwise valid JSON response
///
/// The connection client never produces this on its own; it comes out of
/// [`ApiResponse::into_result`](crate::ApiResponse::into_result) when the
/// caller asks for classification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("provider error {code}: {message}")]
pub struct ProviderError {
    /// Provider response code (e.g. "02000")
    pub code: String,
    /// Provider message, empty if none was sent
    pub message: String,
}

impl ProviderError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
