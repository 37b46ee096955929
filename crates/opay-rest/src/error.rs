//! Error types for REST API operations

use opay_auth::AuthError;
use opay_types::ProviderError;

/// Maximum number of body bytes kept in a parse error
const BODY_EXCERPT_LEN: usize = 256;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// The HTTP exchange could not complete (DNS, connect, timeout, body read)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body is not a JSON object
    #[error("Parse error (HTTP {status}): {message}")]
    Parse {
        /// HTTP status of the response
        status: u16,
        /// Why parsing failed
        message: String,
        /// Leading part of the body, for diagnostics
        body: String,
    },

    /// Request parameters could not be serialized
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Configured base URL is not usable
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Credential problem
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Provider reported a business failure
    ///
    /// Only produced when the caller converts a response with
    /// [`ApiResponse::into_result`](opay_types::ApiResponse::into_result).
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl RestError {
    /// Build a parse error, keeping a bounded excerpt of the body
    pub fn parse(status: u16, message: impl Into<String>, body: &[u8]) -> Self {
        let end = body.len().min(BODY_EXCERPT_LEN);
        Self::Parse {
            status,
            message: message.into(),
            body: String::from_utf8_lossy(&body[..end]).into_owned(),
        }
    }

    /// Check if this error is a transport failure
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this error is a response parse failure
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Check if the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// HTTP status, when a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Parse { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
