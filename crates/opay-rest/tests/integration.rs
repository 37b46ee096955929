//! Integration tests for the connection client and feature modules
//!
//! Every test runs against a local httpmock server.

mod common;

use common::*;
use httpmock::{Method, MockServer};
use opay_rest::{
    ApiResponse, AuthScheme, ClientConfig, ConnectionClient, Endpoint, HttpMethod, Params,
    RestError, RestResult,
};
use serde_json::json;
use std::time::Duration;

/// Dispatch through the public feature-module API
async fn call(
    client: &ConnectionClient,
    endpoint: Endpoint,
    params: &Params,
) -> RestResult<ApiResponse> {
    match endpoint {
        Endpoint::InitializeCheckout => client.cashout().initialize_transaction(params).await,
        Endpoint::CheckoutStatus => client.cashout().transaction_status(params).await,
        Endpoint::CloseCheckout => client.cashout().close_transaction(params).await,
        Endpoint::TransferToWallet => client.wallet_transfer().transfer(params).await,
        Endpoint::WalletTransferStatus => client.wallet_transfer().transfer_status(params).await,
        Endpoint::TransferToBank => client.bank_transfer().transfer(params).await,
        Endpoint::BankTransferStatus => client.bank_transfer().transfer_status(params).await,
        Endpoint::SupportedCountries => client.bank_transfer().supported_countries(params).await,
        Endpoint::SupportedBanks => client.bank_transfer().supported_banks(params).await,
        Endpoint::Balance => client.inquiry().balance(params).await,
        Endpoint::ValidateUser => client.inquiry().validate_user(params).await,
        Endpoint::ValidateMerchant => client.inquiry().validate_merchant(params).await,
        Endpoint::ResolveAccountNumber => client.verification().resolve_account_name(params).await,
    }
}

fn http_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Post => Method::POST,
        HttpMethod::Get => Method::GET,
    }
}

// ============================================================================
// Routing
// ============================================================================

#[tokio::test]
async fn test_every_operation_hits_its_endpoint_once() {
    for endpoint in Endpoint::ALL {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(http_method(endpoint.method()))
                    .path(endpoint.path())
                    .header("MerchantId", MERCHANT_ID);
                then.status(200).json_body(generic_success());
            })
            .await;

        let client = client_for(&server);
        let params = Params::new().with("reference", "TXN123");
        let response = call(&client, endpoint, &params).await;

        assert!(response.is_ok(), "{}: {:?}", endpoint.name(), response);
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_status_and_close_share_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::POST).path("/cashier/status");
            then.status(200).json_body(generic_success());
        })
        .await;

    let client = client_for(&server);
    let params = Params::new().with("reference", "TXN123");

    client.cashout().transaction_status(&params).await.unwrap();
    client.cashout().close_transaction(&params).await.unwrap();

    assert_eq!(mock.hits_async().await, 2);
}

#[tokio::test]
async fn test_base_url_prefix_preserved() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::POST).path("/api/v3/transfer/toBank");
            then.status(200).json_body(generic_success());
        })
        .await;

    let config = ClientConfig::new(credentials()).with_base_url(server.url("/api/v3/"));
    let client = ConnectionClient::new(config).unwrap();

    client.bank_transfer().transfer(&Params::new()).await.unwrap();
    mock.assert_async().await;
}

// ============================================================================
// POST requests
// ============================================================================

#[tokio::test]
async fn test_initialize_transaction_sorted_body() {
    let server = MockServer::start_async().await;
    let expected_body = r#"{"amount":"500","reference":"TXN123"}"#;

    let mock = server
        .mock_async(|when, then| {
            when.method(Method::POST)
                .path("/cashier/initialize")
                .header("content-type", "application/json")
                .header("Authorization", expected_public_key())
                .body(expected_body);
            then.status(200).json_body(checkout_initialized());
        })
        .await;

    let client = client_for(&server);
    let params = Params::new()
        .with("reference", "TXN123")
        .with("amount", "500");

    let response = client.cashout().initialize_transaction(&params).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.into_value(), checkout_initialized());
}

#[tokio::test]
async fn test_signed_post_carries_hmac_of_body() {
    let server = MockServer::start_async().await;
    let params = Params::new()
        .with("reference", "TRF-0001")
        .with("amount", "100000")
        .with("currency", "NGN")
        .with("country", "NG")
        .with("reason", "payout")
        .with(
            "receiver",
            json!({"type": "USER", "phoneNumber": "+2348000000000", "name": "Ada"}),
        );
    let body = params.to_json().unwrap();
    let authorization = expected_signature(&body);

    let mock = server
        .mock_async(|when, then| {
            when.method(Method::POST)
                .path("/transfer/toWallet")
                .header("Authorization", authorization.as_str())
                .header("MerchantId", MERCHANT_ID)
                .json_body(json!({
                    "amount": "100000",
                    "country": "NG",
                    "currency": "NGN",
                    "reason": "payout",
                    "receiver": {"name": "Ada", "phoneNumber": "+2348000000000", "type": "USER"},
                    "reference": "TRF-0001"
                }));
            then.status(200).json_body(generic_success());
        })
        .await;

    let client = client_for(&server);
    client.wallet_transfer().transfer(&params).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_post_sends_empty_object() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::POST)
                .path("/verification/accountNumber/resolve")
                .header("Authorization", expected_signature("{}"))
                .body("{}");
            then.status(200).json_body(generic_success());
        })
        .await;

    let client = client_for(&server);
    client
        .verification()
        .resolve_account_name(&Params::new())
        .await
        .unwrap();

    mock.assert_async().await;
}

// ============================================================================
// GET requests
// ============================================================================

#[tokio::test]
async fn test_validate_user_sends_query() {
    let server = MockServer::start_async().await;
    let query = "countryCode=NG&phoneNumber=%2B2348000000000";

    let mock = server
        .mock_async(|when, then| {
            when.method(Method::GET)
                .path("/info/user")
                .query_param("phoneNumber", "+2348000000000")
                .query_param("countryCode", "NG")
                .header("Authorization", expected_signature(query));
            then.status(200).json_body(json!({
                "code": "00000",
                "message": "SUCCESSFUL",
                "data": {"phoneNumber": "+2348000000000", "firstName": "Ada", "lastName": "Obi"}
            }));
        })
        .await;

    let client = client_for(&server);
    let params = Params::new()
        .with("phoneNumber", "+2348000000000")
        .with("countryCode", "NG");

    let response = client.inquiry().validate_user(&params).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.data().unwrap()["firstName"], "Ada");
}

#[tokio::test]
async fn test_supported_banks_uses_public_key() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::GET)
                .path("/banks")
                .query_param("countryCode", "NG")
                .header("Authorization", expected_public_key());
            then.status(200).json_body(json!({
                "code": "00000",
                "message": "SUCCESSFUL",
                "data": [{"code": "058", "name": "GTBank"}]
            }));
        })
        .await;

    let client = client_for(&server);
    let params = Params::new().with("countryCode", "NG");
    let response = client.bank_transfer().supported_banks(&params).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.data().unwrap()[0]["name"], "GTBank");
}

#[tokio::test]
async fn test_balance_without_params() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::GET)
                .path("/balance")
                .header("Authorization", expected_signature(""));
            then.status(200).json_body(json!({
                "code": "00000",
                "message": "SUCCESSFUL",
                "data": {"balanceAccount": {"amount": "1000", "currency": "NGN"}}
            }));
        })
        .await;

    let client = client_for(&server);
    let response = client.inquiry().balance(&Params::new()).await.unwrap();

    mock.assert_async().await;
    assert!(response.is_success());
}

#[tokio::test]
async fn test_send_raw_custom_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::POST)
                .path("/cashier/refund")
                .header("Authorization", expected_public_key());
            then.status(200).json_body(generic_success());
        })
        .await;

    let client = client_for(&server);
    client
        .send_raw(&Params::new(), "/cashier/refund", HttpMethod::Post, AuthScheme::PublicKey)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_send_raw_relative_path() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::POST).path("/api/v3/cashier/refund");
            then.status(200).json_body(generic_success());
        })
        .await;

    init_tracing();
    let config = ClientConfig::new(credentials()).with_base_url(server.url("/api/v3"));
    let client = ConnectionClient::new(config).unwrap();
    client
        .send_raw(&Params::new(), "cashier/refund", HttpMethod::Post, AuthScheme::Signature)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_null_query_value_sent_as_json_text() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(Method::GET)
                .path("/banks")
                .query_param("cursor", "null")
                .query_param("countryCode", "NG");
            then.status(200).json_body(generic_success());
        })
        .await;

    let client = client_for(&server);
    let params = Params::new()
        .with("countryCode", "NG")
        .with("cursor", serde_json::Value::Null);
    client.bank_transfer().supported_banks(&params).await.unwrap();

    mock.assert_async().await;
}

// ============================================================================
// Responses and errors
// ============================================================================

#[tokio::test]
async fn test_business_failure_is_returned_not_raised() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(Method::POST).path("/transfer/status/toBank");
            then.status(200).json_body(authentication_failed());
        })
        .await;

    let client = client_for(&server);
    let response = client
        .bank_transfer()
        .transfer_status(&Params::new().with("reference", "TRF-0001"))
        .await
        .unwrap();

    assert!(!response.is_success());
    assert_eq!(response.code(), Some("02000"));

    let err: RestError = response.into_result().unwrap_err().into();
    assert!(matches!(err, RestError::Provider(_)));
}

#[tokio::test]
async fn test_json_error_status_is_returned() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(Method::GET).path("/info/merchant");
            then.status(400).json_body(json!({"code": "02001", "message": "bad request"}));
        })
        .await;

    let client = client_for(&server);
    let response = client
        .inquiry()
        .validate_merchant(&Params::new().with("email", "shop@example.com"))
        .await
        .unwrap();

    assert_eq!(response.message(), Some("bad request"));
}

#[tokio::test]
async fn test_non_json_body_is_parse_error_without_retry() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::POST).path("/cashier/initialize");
            then.status(502).body("<html>Bad Gateway</html>");
        })
        .await;

    let client = client_for(&server);
    let err = client
        .cashout()
        .initialize_transaction(&Params::new().with("reference", "TXN123"))
        .await
        .unwrap_err();

    assert!(err.is_parse(), "unexpected error: {:?}", err);
    assert_eq!(err.status(), Some(502));
    assert_eq!(mock.hits_async().await, 1);
}

#[tokio::test]
async fn test_empty_body_is_parse_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(Method::GET).path("/countries");
            then.status(204);
        })
        .await;

    let client = client_for(&server);
    let err = client
        .bank_transfer()
        .supported_countries(&Params::new())
        .await
        .unwrap_err();

    assert!(err.is_parse());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    init_tracing();
    let config = ClientConfig::new(credentials()).with_base_url("http://127.0.0.1:1");
    let client = ConnectionClient::new(config).unwrap();

    let err = client
        .cashout()
        .transaction_status(&Params::new().with("reference", "TXN123"))
        .await
        .unwrap_err();

    assert!(err.is_transport(), "unexpected error: {:?}", err);
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::GET).path("/balance");
            then.status(200)
                .json_body(generic_success())
                .delay(Duration::from_secs(3));
        })
        .await;

    init_tracing();
    let config = ClientConfig::new(credentials())
        .with_base_url(server.base_url())
        .with_timeout(1);
    let client = ConnectionClient::new(config).unwrap();

    let err = client.inquiry().balance(&Params::new()).await.unwrap_err();

    assert!(err.is_transport());
    assert!(err.is_timeout());
    assert_eq!(mock.hits_async().await, 1);
}

#[tokio::test]
async fn test_cloned_client_shared_across_tasks() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(Method::POST).path("/transfer/status/toWallet");
            then.status(200).json_body(generic_success());
        })
        .await;

    let client = client_for(&server);
    let mut handles = Vec::new();
    for i in 0..4 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            let params = Params::new().with("reference", format!("TRF-{}", i));
            client.wallet_transfer().transfer_status(&params).await
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
    assert_eq!(mock.hits_async().await, 4);
}
