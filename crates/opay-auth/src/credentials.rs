//! Merchant credentials for the OPay API
//!
//! Implements the HMAC-SHA512 signing used by OPay's signed endpoints.
//!
//! # Security
//!
//! The secret key is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use opay_types::AuthScheme;
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha512;
use tracing::trace;

use crate::error::{AuthError, AuthResult};

type HmacSha512 = Hmac<Sha512>;

const MERCHANT_ID_VAR: &str = "OPAY_MERCHANT_ID";
const PUBLIC_KEY_VAR: &str = "OPAY_PUBLIC_KEY";
const SECRET_KEY_VAR: &str = "OPAY_SECRET_KEY";

/// Merchant credentials for authenticated requests
///
/// The secret key is zeroized when the Credentials are dropped.
pub struct Credentials {
    /// Merchant identifier, sent as the `MerchantId` header
    merchant_id: String,
    /// Public key, used as bearer token on public-key endpoints
    public_key: String,
    /// Secret key for signing (zeroized on drop)
    secret_key: SecretString,
}

impl Credentials {
    /// Create new credentials
    ///
    /// # Arguments
    /// * `merchant_id` - Your OPay merchant ID
    /// * `public_key` - Your public key (e.g. "OPAYPUB...")
    /// * `secret_key` - Your secret key (e.g. "OPAYPRV...")
    ///
    /// # Returns
    /// Error if any of the three values is empty.
    pub fn new(
        merchant_id: impl Into<String>,
        public_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> AuthResult<Self> {
        let merchant_id = merchant_id.into();
        let public_key = public_key.into();
        let secret_key = secret_key.into();

        if merchant_id.trim().is_empty() {
            return Err(AuthError::InvalidCredentials("merchant id is empty".to_string()));
        }
        if public_key.trim().is_empty() {
            return Err(AuthError::InvalidCredentials("public key is empty".to_string()));
        }
        if secret_key.is_empty() {
            return Err(AuthError::InvalidCredentials("secret key is empty".to_string()));
        }

        Ok(Self {
            merchant_id,
            public_key,
            secret_key: SecretString::from(secret_key),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `OPAY_MERCHANT_ID`, `OPAY_PUBLIC_KEY` and `OPAY_SECRET_KEY`.
    pub fn from_env() -> AuthResult<Self> {
        let merchant_id = read_var(MERCHANT_ID_VAR)?;
        let public_key = read_var(PUBLIC_KEY_VAR)?;
        let secret_key = read_var(SECRET_KEY_VAR)?;

        Self::new(merchant_id, public_key, secret_key)
    }

    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Sign a payload
    ///
    /// OPay signature algorithm:
    /// 1. HMAC-SHA512(secret_key, payload)
    /// 2. Lowercase hex encode result
    ///
    /// `payload` is the exact bytes sent: the JSON body for POST, the query
    /// string for GET.
    pub fn sign(&self, payload: &str) -> String {
        let mut mac = HmacSha512::new_from_slice(self.secret_key.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Build the `Authorization` header value for a request
    pub fn authorization(&self, scheme: AuthScheme, payload: &str) -> String {
        trace!(?scheme, "Building authorization header");
        match scheme {
            AuthScheme::PublicKey => format!("Bearer {}", self.public_key),
            AuthScheme::Signature => format!("Bearer {}", self.sign(payload)),
        }
    }
}

fn read_var(name: &str) -> AuthResult<String> {
    std::env::var(name).map_err(|_| AuthError::EnvVarNotSet(name.to_string()))
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            merchant_id: self.merchant_id.clone(),
            public_key: self.public_key.clone(),
            secret_key: SecretString::from(self.secret_key.expose_secret().to_string()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let public_prefix: String = self.public_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("merchant_id", &self.merchant_id)
            .field("public_key", &format!("{}...", public_prefix))
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> Credentials {
        Credentials::new("256612345678901", "OPAYPUB1234567890", "Jefe").unwrap()
    }

    #[test]
    fn test_sign_known_vector() {
        // RFC 4231 test case 2
        let signature = creds().sign("what do ya want for nothing?");
        assert_eq!(
            signature,
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        let signature = creds().sign(r#"{"amount":"500","reference":"TXN123"}"#);
        assert_eq!(signature.len(), 128);
        assert!(signature
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_signing_consistency() {
        let creds = creds();
        let body = r#"{"reference":"TXN123"}"#;
        assert_eq!(creds.sign(body), creds.sign(body));
        assert_ne!(creds.sign(body), creds.sign(r#"{"reference":"TXN124"}"#));
    }

    #[test]
    fn test_authorization_schemes() {
        let creds = creds();
        assert_eq!(
            creds.authorization(AuthScheme::PublicKey, "ignored"),
            "Bearer OPAYPUB1234567890"
        );
        assert_eq!(
            creds.authorization(AuthScheme::Signature, "payload"),
            format!("Bearer {}", creds.sign("payload"))
        );
    }

    #[test]
    fn test_empty_values_rejected() {
        assert!(matches!(
            Credentials::new("", "pub", "secret"),
            Err(AuthError::InvalidCredentials(_))
        ));
        assert!(matches!(
            Credentials::new("merchant", " ", "secret"),
            Err(AuthError::InvalidCredentials(_))
        ));
        assert!(matches!(
            Credentials::new("merchant", "pub", ""),
            Err(AuthError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("256612345678901", "OPAYPUB1234567890", "OPAYPRVsupersecret")
            .unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("OPAYPRVsupersecret"));
        assert!(!debug.contains("OPAYPUB1234567890"));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("256612345678901"));
    }

    #[test]
    fn test_clone_signs_identically() {
        let creds = creds();
        let cloned = creds.clone();
        assert_eq!(creds.sign("x"), cloned.sign("x"));
        assert_eq!(cloned.merchant_id(), "256612345678901");
    }
}
