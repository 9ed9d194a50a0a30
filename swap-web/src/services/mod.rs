//! Browser-side adapters for the widget controller

pub mod alert;
pub mod ethereum;

pub use alert::BrowserNotifier;
pub use ethereum::{InjectedWallet, WalletConnectSession};
