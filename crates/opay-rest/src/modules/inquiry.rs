//! Read-only lookups: balances, users and merchants

use crate::client::ConnectionClient;
use crate::error::RestResult;
use opay_types::{ApiResponse, Endpoint, Params};
use tracing::{debug, instrument};

/// Inquiry endpoints
pub struct Inquiry<'a> {
    client: &'a ConnectionClient,
}

impl<'a> Inquiry<'a> {
    pub fn new(client: &'a ConnectionClient) -> Self {
        Self { client }
    }

    /// Balances of all merchant accounts
    #[instrument(skip(self, params))]
    pub async fn balance(&self, params: &Params) -> RestResult<ApiResponse> {
        debug!("Querying balances");
        self.client.send(params, Endpoint::Balance).await
    }

    /// Validate an OPay user by `phoneNumber`
    #[instrument(skip(self, params))]
    pub async fn validate_user(&self, params: &Params) -> RestResult<ApiResponse> {
        debug!("Validating user");
        self.client.send(params, Endpoint::ValidateUser).await
    }

    /// Validate an OPay merchant by `email`
    #[instrument(skip(self, params))]
    pub async fn validate_merchant(&self, params: &Params) -> RestResult<ApiResponse> {
        debug!("Validating merchant");
        self.client.send(params, Endpoint::ValidateMerchant).await
    }
}
