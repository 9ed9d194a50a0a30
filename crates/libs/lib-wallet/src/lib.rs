//! # Wallet Swap Widget Library
//!
//! Platform-independent core of the wallet swap widget: wallet session
//! handling, balance reading, and a capped history of simulated swaps.
//!
//! - **[`widget`]**: the [`SwapWidget`] controller
//! - **[`provider`]**: the [`WalletProvider`] capability trait and [`ProviderChain`]
//! - **[`session`]**, **[`history`]**, **[`balance`]**: state and formatting
//! - **[`swap`]**: swap execution backend (simulated)
//! - **[`notify`]**: user-facing alerts
//! - **[`config`]**, **[`error`]**: configuration and error types
//!
//! ```rust,no_run
//! use lib_wallet::{ProviderChain, SwapWidget, WidgetConfig};
//!
//! # async fn example(providers: ProviderChain) -> lib_wallet::Result<()> {
//! let widget = SwapWidget::new(providers, WidgetConfig::from_env().unwrap_or_default());
//! let address = widget.connect().await?;
//! widget.update_form(|f| f.source_amount = "0.001".to_string());
//! let record = widget.submit_swap().await?;
//! println!("{address}: {}", record.id);
//! # Ok(())
//! # }
//! ```

pub mod balance;
pub mod config;
pub mod error;
pub mod history;
pub mod notify;
pub mod provider;
pub mod session;
pub mod swap;
pub mod widget;

pub use config::{WidgetConfig, HISTORY_CAPACITY};
pub use error::{Action, Result, WalletError};
pub use history::SwapHistory;
pub use notify::Notifier;
pub use provider::{ProviderChain, ProviderKind, WalletProvider};
pub use session::WalletSession;
pub use swap::{SimulatedSwap, SwapBackend};
pub use widget::{SwapWidget, WidgetSnapshot};
