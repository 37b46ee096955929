//! Credentials and request signing for the OPay cashier API
//!
//! Every OPay request carries a `MerchantId` header and an
//! `Authorization: Bearer ...` header. Depending on the endpoint the bearer
//! token is either the merchant's public key or an HMAC-SHA512 signature of
//! the request payload keyed with the secret key.
//!
//! # Example
//!
//! ```no_run
//! use opay_auth::Credentials;
//! use opay_types::AuthScheme;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load credentials from environment
//!     let creds = Credentials::from_env()?;
//!
//!     let body = r#"{"amount":"500","reference":"TXN123"}"#;
//!     let header = creds.authorization(AuthScheme::Signature, body);
//!     println!("Authorization: {}", header);
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;

pub use credentials::Credentials;
pub use error::{AuthError, AuthResult};
