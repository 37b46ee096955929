//! Transfers to OPay wallets

use crate::client::ConnectionClient;
use crate::error::RestResult;
use opay_types::{ApiResponse, Endpoint, Params};
use tracing::{debug, instrument};

/// Wallet transfer endpoints
pub struct WalletTransfer<'a> {
    client: &'a ConnectionClient,
}

impl<'a> WalletTransfer<'a> {
    pub fn new(client: &'a ConnectionClient) -> Self {
        Self { client }
    }

    /// Send funds to an OPay user or merchant wallet
    ///
    /// Typical parameters: `reference`, `amount`, `currency`, `country`,
    /// `receiver` (`type`, `phoneNumber` or `merchantId`, `name`), `reason`.
    #[instrument(skip(self, params))]
    pub async fn transfer(&self, params: &Params) -> RestResult<ApiResponse> {
        debug!("Transferring to wallet");
        self.client.send(params, Endpoint::TransferToWallet).await
    }

    /// Query a wallet transfer by `reference` and/or `orderNo`
    #[instrument(skip(self, params))]
    pub async fn transfer_status(&self, params: &Params) -> RestResult<ApiResponse> {
        debug!("Querying wallet transfer status");
        self.client.send(params, Endpoint::WalletTransferStatus).await
    }
}
