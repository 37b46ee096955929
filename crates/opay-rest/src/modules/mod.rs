//! Feature modules
//!
//! Each module borrows a [`ConnectionClient`](crate::ConnectionClient) and
//! maps its operations onto fixed [`Endpoint`](opay_types::Endpoint)s.
//! Parameters are forwarded as given; completeness checks are the caller's.

pub mod bank_transfer;
pub mod cashout;
pub mod inquiry;
pub mod verification;
pub mod wallet_transfer;

pub use bank_transfer::BankTransfer;
pub use cashout::Cashout;
pub use inquiry::Inquiry;
pub use verification::Verification;
pub use wallet_transfer::WalletTransfer;
