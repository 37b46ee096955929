//! Account-name verification

use crate::client::ConnectionClient;
use crate::error::RestResult;
use opay_types::{ApiResponse, Endpoint, Params};
use tracing::{debug, instrument};

/// Verification endpoints
pub struct Verification<'a> {
    client: &'a ConnectionClient,
}

impl<'a> Verification<'a> {
    pub fn new(client: &'a ConnectionClient) -> Self {
        Self { client }
    }

    /// Resolve a bank account number to its allocated account name
    ///
    /// # Arguments
    /// * `params` - `bankCode`, `bankAccountNo`, `countryCode`
    #[instrument(skip(self, params))]
    pub async fn resolve_account_name(&self, params: &Params) -> RestResult<ApiResponse> {
        debug!("Resolving account number");
        self.client.send(params, Endpoint::ResolveAccountNumber).await
    }
}
