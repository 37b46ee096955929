//! Shared types for the OPay cashier REST API
//!
//! This crate provides the core type definitions used across the OPay SDK.
//! It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`Endpoint`] - Registry of every provider operation (path, method, auth)
//! - [`HttpMethod`], [`AuthScheme`] - How an endpoint is called
//! - [`Params`] - Ordered request parameters with deterministic serialization
//! - [`ApiResponse`] - Pass-through JSON object returned by the provider
//! - [`ProviderError`] - Business failure reported inside a response body

pub mod endpoint;
pub mod error;
pub mod params;
pub mod response;

// Re-export commonly used types
pub use endpoint::*;
pub use error::*;
pub use params::*;
pub use response::*;
