//! REST API client for the OPay cashier API
//!
//! This crate provides a thin, typed client over OPay's merchant REST API:
//! hosted checkout, wallet and bank transfers, balance and account inquiry,
//! and account-name verification.
//!
//! # Features
//!
//! - **Cashout**: Initialize, query and close hosted checkouts
//! - **Wallet Transfer**: Send to OPay wallets, query transfer status
//! - **Bank Transfer**: Send to bank accounts, list supported countries and banks
//! - **Inquiry**: Balances, user and merchant validation
//! - **Verification**: Resolve an account number to its account name
//!
//! # Authentication
//!
//! Every request carries the merchant ID. Public endpoints authenticate with
//! the public key; all others send an HMAC-SHA512 signature of the request
//! payload, keyed with the secret key.
//!
//! # Example
//!
//! ```no_run
//! use opay_rest::{ClientConfig, ConnectionClient, Credentials, Params};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!     let client = ConnectionClient::new(ClientConfig::new(creds))?;
//!
//!     let params = Params::new()
//!         .with("reference", "TXN123")
//!         .with("amount", "500");
//!     let response = client.cashout().initialize_transaction(&params).await?;
//!     println!("Checkout: {:?}", response);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Business Errors
//!
//! Responses are returned exactly as the provider sent them, including
//! provider-side failures carried in a successful HTTP response. Use
//! [`ApiResponse::is_success`] or [`ApiResponse::into_result`] to classify.

pub mod client;
pub mod error;
pub mod modules;

// Re-export main types
pub use client::{ClientConfig, ConnectionClient, Environment};
pub use error::{RestError, RestResult};
pub use opay_auth::Credentials;
pub use opay_types::{ApiResponse, AuthScheme, Endpoint, HttpMethod, Params, ProviderError};

// Re-export feature modules
pub use modules::{BankTransfer, Cashout, Inquiry, Verification, WalletTransfer};
