//! Transfers to bank accounts
//!
//! Also exposes the lookups needed before a bank transfer: which countries
//! and which banks the provider currently supports.

use crate::client::ConnectionClient;
use crate::error::RestResult;
use opay_types::{ApiResponse, Endpoint, Params};
use tracing::{debug, instrument};

/// Bank transfer endpoints
pub struct BankTransfer<'a> {
    client: &'a ConnectionClient,
}

impl<'a> BankTransfer<'a> {
    pub fn new(client: &'a ConnectionClient) -> Self {
        Self { client }
    }

    /// Send funds to an external bank account
    ///
    /// Typical parameters: `reference`, `amount`, `currency`, `country`,
    /// `receiver` (`name`, `bankCode`, `bankAccountNumber`), `reason`.
    #[instrument(skip(self, params))]
    pub async fn transfer(&self, params: &Params) -> RestResult<ApiResponse> {
        debug!("Transferring to bank");
        self.client.send(params, Endpoint::TransferToBank).await
    }

    /// Query a bank transfer by `reference` and/or `orderNo`
    #[instrument(skip(self, params))]
    pub async fn transfer_status(&self, params: &Params) -> RestResult<ApiResponse> {
        debug!("Querying bank transfer status");
        self.client.send(params, Endpoint::BankTransferStatus).await
    }

    /// Countries currently supported for transfers
    ///
    /// Usually called with empty parameters.
    #[instrument(skip(self, params))]
    pub async fn supported_countries(&self, params: &Params) -> RestResult<ApiResponse> {
        debug!("Listing supported countries");
        self.client.send(params, Endpoint::SupportedCountries).await
    }

    /// Banks currently supported for transfers, filtered by `countryCode`
    #[instrument(skip(self, params))]
    pub async fn supported_banks(&self, params: &Params) -> RestResult<ApiResponse> {
        debug!("Listing supported banks");
        self.client.send(params, Endpoint::SupportedBanks).await
    }
}
