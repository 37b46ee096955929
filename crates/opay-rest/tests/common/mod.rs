//! Common test utilities and fixtures for integration tests
//!
//! Response bodies mirror the provider's sandbox responses.

#![allow(dead_code)]

use httpmock::MockServer;
use opay_rest::{ClientConfig, ConnectionClient, Credentials};
use serde_json::{json, Value};

pub const MERCHANT_ID: &str = "256612345678901";
pub const PUBLIC_KEY: &str = "OPAYPUB16126896836670.9184349165713596";
pub const SECRET_KEY: &str = "OPAYPRV16126896836670.8722012432580498";

/// Route library logs through the test harness when `RUST_LOG` is set
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn credentials() -> Credentials {
    Credentials::new(MERCHANT_ID, PUBLIC_KEY, SECRET_KEY).unwrap()
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> ConnectionClient {
    init_tracing();
    let config = ClientConfig::new(credentials()).with_base_url(server.base_url());
    ConnectionClient::new(config).unwrap()
}

pub fn expected_signature(payload: &str) -> String {
    format!("Bearer {}", credentials().sign(payload))
}

pub fn expected_public_key() -> String {
    format!("Bearer {}", PUBLIC_KEY)
}

/// Successful checkout initialization
pub fn checkout_initialized() -> Value {
    json!({
        "code": "00000",
        "message": "SUCCESSFUL",
        "data": {
            "reference": "TXN123",
            "orderNo": "211003140885429883",
            "cashierUrl": "https://sandbox-cashier.opayweb.com/#/?orderToken=TOKEN",
            "status": "INITIAL",
            "amount": {"total": 500, "currency": "NGN"}
        }
    })
}

/// Business failure carried in an HTTP 200 response
pub fn authentication_failed() -> Value {
    json!({
        "code": "02000",
        "message": "authentication failed."
    })
}

pub fn generic_success() -> Value {
    json!({"code": "00000", "message": "SUCCESSFUL", "data": {}})
}
