//! Endpoint registry for the OPay cashier API
//!
//! Every provider operation the SDK supports is a variant of [`Endpoint`].
//! Paths are relative to the configured base URL.

use std::fmt;

/// HTTP verb used by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// JSON body
    Post,
    /// Query string
    Get,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Get => "GET",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the `Authorization` header is built for an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthScheme {
    /// `Bearer <public key>`
    PublicKey,
    /// `Bearer <hex HMAC-SHA512 of the payload, keyed with the secret key>`
    Signature,
}

/// OPay REST endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    // Checkout (cashier)
    /// Create a hosted checkout
    InitializeCheckout,
    /// Query a checkout by reference
    CheckoutStatus,
    /// Close a pending checkout
    CloseCheckout,

    // Transfer to OPay wallet
    /// Send funds to an OPay user or merchant wallet
    TransferToWallet,
    /// Query a wallet transfer
    WalletTransferStatus,

    // Transfer to bank
    /// Send funds to an external bank account
    TransferToBank,
    /// Query a bank transfer
    BankTransferStatus,
    /// Countries currently supported for transfers
    SupportedCountries,
    /// Banks currently supported for transfers
    SupportedBanks,

    // Inquiry
    /// Balances of all merchant accounts
    Balance,
    /// Validate an OPay user
    ValidateUser,
    /// Validate an OPay merchant
    ValidateMerchant,

    // Verification
    /// Resolve a bank account number to its allocated account name
    ResolveAccountNumber,
}

impl Endpoint {
    /// Every registered endpoint, in declaration order
    pub const ALL: [Endpoint; 13] = [
        Self::InitializeCheckout,
        Self::CheckoutStatus,
        Self::CloseCheckout,
        Self::TransferToWallet,
        Self::WalletTransferStatus,
        Self::TransferToBank,
        Self::BankTransferStatus,
        Self::SupportedCountries,
        Self::SupportedBanks,
        Self::Balance,
        Self::ValidateUser,
        Self::ValidateMerchant,
        Self::ResolveAccountNumber,
    ];

    /// Path relative to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Self::InitializeCheckout => "/cashier/initialize",
            // The provider closes a checkout through its status endpoint.
            Self::CheckoutStatus | Self::CloseCheckout => "/cashier/status",
            Self::TransferToWallet => "/transfer/toWallet",
            Self::WalletTransferStatus => "/transfer/status/toWallet",
            Self::TransferToBank => "/transfer/toBank",
            Self::BankTransferStatus => "/transfer/status/toBank",
            Self::SupportedCountries => "/countries",
            Self::SupportedBanks => "/banks",
            Self::Balance => "/balance",
            Self::ValidateUser => "/info/user",
            Self::ValidateMerchant => "/info/merchant",
            Self::ResolveAccountNumber => "/verification/accountNumber/resolve",
        }
    }

    /// HTTP verb for this endpoint
    pub fn method(&self) -> HttpMethod {
        match self {
            Self::SupportedCountries
            | Self::SupportedBanks
            | Self::Balance
            | Self::ValidateUser
            | Self::ValidateMerchant => HttpMethod::Get,
            _ => HttpMethod::Post,
        }
    }

    /// Authorization scheme for this endpoint
    pub fn auth(&self) -> AuthScheme {
        match self {
            Self::InitializeCheckout | Self::SupportedCountries | Self::SupportedBanks => {
                AuthScheme::PublicKey
            }
            _ => AuthScheme::Signature,
        }
    }

    /// Human-readable operation name, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::InitializeCheckout => "initialize checkout",
            Self::CheckoutStatus => "checkout status",
            Self::CloseCheckout => "close checkout",
            Self::TransferToWallet => "transfer to wallet",
            Self::WalletTransferStatus => "wallet transfer status",
            Self::TransferToBank => "transfer to bank",
            Self::BankTransferStatus => "bank transfer status",
            Self::SupportedCountries => "supported transfer countries",
            Self::SupportedBanks => "supported banks",
            Self::Balance => "balance inquiry",
            Self::ValidateUser => "validate user",
            Self::ValidateMerchant => "validate merchant",
            Self::ResolveAccountNumber => "resolve account number",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}
