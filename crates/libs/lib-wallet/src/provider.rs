//! # Wallet Provider Capability
//!
//! The widget talks to wallets only through [`WalletProvider`]. Each kind of
//! wallet (browser-injected, remote-session) gets one adapter implementing it;
//! the browser adapters live in `swap-web`, tests use in-memory mocks.
//!
//! Adapters are `?Send`: browser promises are single-threaded and the futures
//! that wrap them cannot cross threads.

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

use crate::error::{Result, WalletError};

/// Which connection path produced a session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Wallet object injected into the page by a browser extension
    Injected,
    /// Wallet reached through an out-of-band pairing session
    RemoteSession,
}

impl ProviderKind {
    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::Injected => "Browser wallet",
            ProviderKind::RemoteSession => "WalletConnect",
        }
    }
}

#[async_trait(?Send)]
pub trait WalletProvider {
    fn kind(&self) -> ProviderKind;

    /// Whether this provider can be used at all in the current environment
    fn is_available(&self) -> bool;

    /// Ask the wallet for account access.
    ///
    /// For a remote-session provider this is the session approval step.
    async fn request_accounts(&self) -> Result<Vec<String>>;

    /// Address of the signer behind an approved session
    async fn signer_address(&self) -> Result<String>;

    /// Native balance of `address` in base units (wei)
    async fn get_balance(&self, address: Address) -> Result<U256>;
}

/// Providers in the order the widget tries them
#[derive(Clone, Default)]
pub struct ProviderChain {
    providers: Vec<Rc<dyn WalletProvider>>,
}

impl ProviderChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, provider: impl WalletProvider + 'static) -> Self {
        self.providers.push(Rc::new(provider));
        self
    }

    /// First provider that reports itself available
    pub fn select(&self) -> Result<Rc<dyn WalletProvider>> {
        self.providers
            .iter()
            .find(|p| p.is_available())
            .cloned()
            .ok_or(WalletError::NoProvider)
    }

    /// Provider of the given kind, used to route balance queries back to the
    /// provider that produced the session
    pub fn by_kind(&self, kind: ProviderKind) -> Option<Rc<dyn WalletProvider>> {
        self.providers.iter().find(|p| p.kind() == kind).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

/// Parse an account string returned by a provider
pub fn parse_account(raw: &str) -> Result<Address> {
    raw.trim()
        .parse::<Address>()
        .map_err(|_| WalletError::InvalidAddress(raw.to_string()))
}
