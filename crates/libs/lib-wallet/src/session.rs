//! Wallet session state

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::provider::ProviderKind;

/// Connection state of the widget.
///
/// `Connecting` is held while a connect call waits on the provider and acts
/// as the in-flight guard for that action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalletSession {
    #[default]
    Disconnected,
    Connecting,
    Connected {
        address: Address,
        provider: ProviderKind,
    },
}

impl WalletSession {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletSession::Connected { .. })
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, WalletSession::Connecting)
    }

    pub fn address(&self) -> Option<Address> {
        match self {
            WalletSession::Connected { address, .. } => Some(*address),
            _ => None,
        }
    }

    /// Checksummed address, or an empty string when not connected
    pub fn address_string(&self) -> String {
        self.address().map(|a| a.to_string()).unwrap_or_default()
    }

    pub fn provider(&self) -> Option<ProviderKind> {
        match self {
            WalletSession::Connected { provider, .. } => Some(*provider),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_session_accessors() {
        let session = WalletSession::Connected {
            address: address!("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
            provider: ProviderKind::Injected,
        };
        assert!(session.is_connected());
        assert_eq!(session.address_string(), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
        assert_eq!(session.provider(), Some(ProviderKind::Injected));

        let session = WalletSession::Connecting;
        assert!(!session.is_connected());
        assert!(session.is_connecting());
        assert_eq!(session.address(), None);
        assert_eq!(session.address_string(), "");
    }
}
