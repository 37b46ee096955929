//! Hosted checkout (cashier) operations
//!
//! A checkout has no local state. It is identified by the `reference` the
//! caller sends and looked up again through [`Cashout::transaction_status`].

use crate::client::ConnectionClient;
use crate::error::RestResult;
use opay_types::{ApiResponse, Endpoint, Params};
use tracing::{debug, instrument};

/// Checkout endpoints
pub struct Cashout<'a> {
    client: &'a ConnectionClient,
}

impl<'a> Cashout<'a> {
    pub fn new(client: &'a ConnectionClient) -> Self {
        Self { client }
    }

    /// Create a hosted checkout
    ///
    /// Typical parameters: `reference`, `mchShortName`, `productName`,
    /// `productDesc`, `userPhone`, `userRequestIp`, `amount`, `currency`,
    /// `payTypes`, `payMethods`, `callbackUrl`, `returnUrl`, `expireAt`.
    #[instrument(skip(self, params))]
    pub async fn initialize_transaction(&self, params: &Params) -> RestResult<ApiResponse> {
        debug!("Initializing checkout");
        self.client.send(params, Endpoint::InitializeCheckout).await
    }

    /// Query a checkout
    ///
    /// # Arguments
    /// * `params` - `reference` and/or `orderNo`
    #[instrument(skip(self, params))]
    pub async fn transaction_status(&self, params: &Params) -> RestResult<ApiResponse> {
        debug!("Querying checkout status");
        self.client.send(params, Endpoint::CheckoutStatus).await
    }

    /// Close a pending checkout
    ///
    /// Shares its path with [`Cashout::transaction_status`].
    #[instrument(skip(self, params))]
    pub async fn close_transaction(&self, params: &Params) -> RestResult<ApiResponse> {
        debug!("Closing checkout");
        self.client.send(params, Endpoint::CloseCheckout).await
    }
}
