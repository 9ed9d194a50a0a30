//! # Wallet Errors
//!
//! Error type shared by every controller operation and provider adapter.
//!
//! ## Error Categories
//!
//! - **Connection**: [`NoProvider`](WalletError::NoProvider),
//!   [`MissingCredential`](WalletError::MissingCredential),
//!   [`Rejected`](WalletError::Rejected), [`NoAccounts`](WalletError::NoAccounts),
//!   [`InvalidAddress`](WalletError::InvalidAddress)
//! - **Balance**: [`Balance`](WalletError::Balance)
//! - **Swap**: [`Swap`](WalletError::Swap)
//! - **State**: [`NotConnected`](WalletError::NotConnected), [`Busy`](WalletError::Busy)
//!
//! The controller decides what each category means for the user (alert, log
//! line or nothing); callers only see the `Result`.

use std::fmt;
use thiserror::Error;

/// Convenience type alias for `Result<T, WalletError>`.
pub type Result<T> = std::result::Result<T, WalletError>;

/// Widget action protected by an in-flight guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Connect,
    Submit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Connect => write!(f, "connect"),
            Action::Submit => write!(f, "swap submission"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// Neither an injected nor a remote-session provider is usable
    #[error("no wallet provider available")]
    NoProvider,

    /// Remote-session provider selected but no service credential configured
    #[error("remote-session provider requires a service credential (set {0})")]
    MissingCredential(&'static str),

    /// The provider rejected the request or threw
    #[error("wallet request rejected: {0}")]
    Rejected(String),

    /// Account access granted but the account list was empty
    #[error("no accounts found")]
    NoAccounts,

    /// Provider returned something that is not a 20-byte hex address
    #[error("invalid account address: {0}")]
    InvalidAddress(String),

    #[error("balance query failed: {0}")]
    Balance(String),

    #[error("swap failed: {0}")]
    Swap(String),

    #[error("wallet not connected")]
    NotConnected,

    /// The same action is already waiting on the provider
    #[error("{0} already in progress")]
    Busy(Action),
}

impl WalletError {
    /// Failures that end a connect attempt, as opposed to guard rejections
    pub fn is_connection_failure(&self) -> bool {
        matches!(
            self,
            WalletError::NoProvider
                | WalletError::MissingCredential(_)
                | WalletError::Rejected(_)
                | WalletError::NoAccounts
                | WalletError::InvalidAddress(_)
        )
    }
}
