//! # Swap Widget Controller
//!
//! Owns the whole widget state: wallet session, balance reading, swap form and
//! swap history. The browser view is a thin layer over this type.
//!
//! ## Operations
//!
//! - [`SwapWidget::connect`] - injected wallet first, remote-session provider otherwise
//! - [`SwapWidget::disconnect`] - clear session and balance
//! - [`SwapWidget::refresh_balance`] - re-read the balance of the connected address
//! - [`SwapWidget::submit_swap`] - record a simulated swap and clear the form
//! - [`SwapWidget::update_form`] - edit the form fields
//!
//! ## Failure Policy
//!
//! | Operation        | On failure                              |
//! |------------------|-----------------------------------------|
//! | `connect`        | alert, session back to disconnected     |
//! | `refresh_balance`| warning logged, previous balance kept   |
//! | `submit_swap`    | alert, form and history untouched       |
//!
//! Overlapping `connect` or `submit_swap` calls are rejected with
//! [`WalletError::Busy`] and raise no alert.
//!
//! The state lock is never held across an `.await`, and the change observer
//! runs after the lock is released so it may call back into the widget.

use alloy_primitives::{Address, U256};
use chrono::Utc;
use parking_lot::RwLock;
use shared::{timestamp_id, SwapFormInput, SwapRecord};
use tracing::{debug, error, info, warn};

use crate::balance::format_balance;
use crate::config::{WidgetConfig, CREDENTIAL_ENV};
use crate::error::{Action, Result, WalletError};
use crate::history::SwapHistory;
use crate::notify::{LogNotifier, Notifier, CONNECT_FAILED_ALERT, SWAP_FAILED_ALERT};
use crate::provider::{parse_account, ProviderChain, ProviderKind};
use crate::session::WalletSession;
use crate::swap::{SimulatedSwap, SwapBackend};

/// Point-in-time copy of the widget state, handed to the view
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WidgetSnapshot {
    pub session: WalletSession,
    pub balance: Option<String>,
    /// Newest first
    pub history: Vec<SwapRecord>,
    pub form: SwapFormInput,
    pub submitting: bool,
}

#[derive(Debug, Default)]
struct WidgetState {
    session: WalletSession,
    balance: Option<String>,
    history: SwapHistory,
    form: SwapFormInput,
    submitting: bool,
    /// Bumped by every connect attempt and every disconnect
    connect_epoch: u64,
}

type Observer = Box<dyn Fn(&WidgetSnapshot)>;

pub struct SwapWidget {
    state: RwLock<WidgetState>,
    providers: ProviderChain,
    config: WidgetConfig,
    swap_backend: Box<dyn SwapBackend>,
    notifier: Box<dyn Notifier>,
    observer: Option<Observer>,
}

impl SwapWidget {
    /// Widget with an empty history, the simulated swap backend and log-only alerts
    pub fn new(providers: ProviderChain, config: WidgetConfig) -> Self {
        Self {
            state: RwLock::new(WidgetState::default()),
            providers,
            config,
            swap_backend: Box::new(SimulatedSwap),
            notifier: Box::new(LogNotifier),
            observer: None,
        }
    }

    pub fn with_history(mut self, history: SwapHistory) -> Self {
        self.state.get_mut().history = history;
        self
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn with_swap_backend(mut self, backend: impl SwapBackend + 'static) -> Self {
        self.swap_backend = Box::new(backend);
        self
    }

    /// Register a callback run after every state change
    pub fn on_change(mut self, observer: impl Fn(&WidgetSnapshot) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn snapshot(&self) -> WidgetSnapshot {
        let state = self.state.read();
        WidgetSnapshot {
            session: state.session.clone(),
            balance: state.balance.clone(),
            history: state.history.to_vec(),
            form: state.form.clone(),
            submitting: state.submitting,
        }
    }

    pub fn session(&self) -> WalletSession {
        self.state.read().session.clone()
    }

    pub fn balance(&self) -> Option<String> {
        self.state.read().balance.clone()
    }

    pub fn history(&self) -> Vec<SwapRecord> {
        self.state.read().history.to_vec()
    }

    pub fn form(&self) -> SwapFormInput {
        self.state.read().form.clone()
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            observer(&self.snapshot());
        }
    }

    // region:    --- Session

    /// Connect a wallet and load its balance.
    ///
    /// Returns the session address. Already connected: returns the current
    /// address without contacting any provider.
    pub async fn connect(&self) -> Result<Address> {
        let epoch = {
            let mut state = self.state.write();
            if let Some(address) = state.session.address() {
                return Ok(address);
            }
            if state.session.is_connecting() {
                return Err(WalletError::Busy(Action::Connect));
            }
            state.session = WalletSession::Connecting;
            state.connect_epoch += 1;
            state.connect_epoch
        };
        self.notify();

        let outcome = self.establish_session().await;

        let applied = {
            let mut state = self.state.write();
            if state.connect_epoch != epoch {
                // superseded by a disconnect or a newer connect
                false
            } else {
                state.session = match &outcome {
                    Ok((address, provider)) => WalletSession::Connected {
                        address: *address,
                        provider: *provider,
                    },
                    Err(_) => WalletSession::Disconnected,
                };
                true
            }
        };

        match outcome {
            Ok((address, provider)) if applied => {
                info!(%address, provider = provider.name(), "Wallet connected");
                self.notify();
                // failure is logged inside and must not fail the connect
                let _ = self.refresh_balance().await;
                Ok(address)
            }
            Ok((address, _)) => {
                debug!(%address, "Stale connect finished, discarding session");
                Err(WalletError::NotConnected)
            }
            Err(e) if !applied => {
                debug!(error = %e, "Stale connect failed, ignoring");
                Err(e)
            }
            Err(e) => {
                error!(error = %e, "Error connecting to wallet");
                self.notifier.alert(CONNECT_FAILED_ALERT);
                self.notify();
                Err(e)
            }
        }
    }

    async fn establish_session(&self) -> Result<(Address, ProviderKind)> {
        let provider = self.providers.select()?;
        let kind = provider.kind();
        debug!(provider = kind.name(), "Selected wallet provider");

        let address = match kind {
            ProviderKind::Injected => {
                let accounts = provider.request_accounts().await?;
                let first = accounts.first().ok_or(WalletError::NoAccounts)?;
                parse_account(first)?
            }
            ProviderKind::RemoteSession => {
                if self.config.credential().is_none() {
                    return Err(WalletError::MissingCredential(CREDENTIAL_ENV));
                }
                provider.request_accounts().await?;
                let signer = provider.signer_address().await?;
                parse_account(&signer)?
            }
        };

        Ok((address, kind))
    }

    /// Drop the session and balance. No provider call is made.
    pub fn disconnect(&self) {
        {
            let mut state = self.state.write();
            state.session = WalletSession::Disconnected;
            state.balance = None;
            state.connect_epoch += 1;
        }
        info!("Wallet disconnected");
        self.notify();
    }

    /// Re-read the native balance of the connected address.
    ///
    /// Returns the formatted reading. A reading for an address that is no
    /// longer connected is returned but not stored.
    pub async fn refresh_balance(&self) -> Result<String> {
        let (address, kind) = {
            let state = self.state.read();
            match (state.session.address(), state.session.provider()) {
                (Some(address), Some(kind)) => (address, kind),
                _ => return Err(WalletError::NotConnected),
            }
        };

        let wei = match self.fetch_balance(address, kind).await {
            Ok(wei) => wei,
            Err(e) => {
                warn!(%address, error = %e, "Error fetching balance");
                return Err(e);
            }
        };
        let formatted = format_balance(wei);

        let stored = {
            let mut state = self.state.write();
            if state.session.address() == Some(address) {
                state.balance = Some(formatted.clone());
                true
            } else {
                false
            }
        };

        if stored {
            debug!(%address, balance = %formatted, "Balance updated");
            self.notify();
        }
        Ok(formatted)
    }

    async fn fetch_balance(&self, address: Address, kind: ProviderKind) -> Result<U256> {
        let provider = self.providers.by_kind(kind).ok_or(WalletError::NoProvider)?;
        provider.get_balance(address).await
    }

    // endregion: --- Session

    // region:    --- Swap

    pub fn update_form(&self, edit: impl FnOnce(&mut SwapFormInput)) {
        {
            let mut state = self.state.write();
            edit(&mut state.form);
        }
        self.notify();
    }

    /// Record the current form as a swap.
    ///
    /// The form contents are not validated. On success the record is the
    /// newest history entry and the form is empty.
    pub async fn submit_swap(&self) -> Result<SwapRecord> {
        let form = {
            let mut state = self.state.write();
            if state.submitting {
                return Err(WalletError::Busy(Action::Submit));
            }
            state.submitting = true;
            state.form.clone()
        };
        self.notify();

        let outcome = self.swap_backend.execute(&form).await;

        let result = {
            let mut state = self.state.write();
            state.submitting = false;
            outcome.map(|()| {
                let id = state.history.unique_id(timestamp_id(Utc::now()));
                let record = SwapRecord::from_form(id, &form);
                state.history.push(record.clone());
                state.form.clear();
                record
            })
        };

        match &result {
            Ok(record) => info!(id = %record.id, "Swap recorded"),
            Err(e) => {
                error!(error = %e, "Error during swap");
                self.notifier.alert(SWAP_FAILED_ALERT);
            }
        }
        self.notify();
        result
    }

    // endregion: --- Swap
}
