//! Test doubles for the widget controller

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use lib_wallet::{
    Notifier, ProviderKind, Result, SwapBackend, WalletError, WalletProvider,
};
use shared::SwapFormInput;
use tokio::sync::Notify;

pub const ACCOUNT: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
pub const OTHER_ACCOUNT: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

pub fn ether(n: u64) -> U256 {
    U256::from(n) * U256::from(10u64).pow(U256::from(18u64))
}

/// In-memory wallet provider with scripted answers
pub struct MockProvider {
    pub kind: ProviderKind,
    pub available: bool,
    pub accounts: Result<Vec<String>>,
    pub signer: Result<String>,
    pub balance: Rc<RefCell<Result<U256>>>,
    pub gate: Option<Rc<Notify>>,
    /// Per-call answers for `request_accounts`, each held by its own gate
    pub replies: RefCell<VecDeque<(Result<Vec<String>>, Rc<Notify>)>>,
    pub balance_gate: Option<Rc<Notify>>,
    pub account_requests: Rc<Cell<usize>>,
}

impl MockProvider {
    pub fn injected(accounts: &[&str]) -> Self {
        Self {
            kind: ProviderKind::Injected,
            available: true,
            accounts: Ok(accounts.iter().map(|a| a.to_string()).collect()),
            signer: Err(WalletError::Rejected("injected wallets have no session signer".into())),
            balance: Rc::new(RefCell::new(Ok(ether(1)))),
            gate: None,
            replies: RefCell::new(VecDeque::new()),
            balance_gate: None,
            account_requests: Rc::new(Cell::new(0)),
        }
    }

    pub fn remote(signer: &str) -> Self {
        Self {
            kind: ProviderKind::RemoteSession,
            available: true,
            accounts: Ok(vec![signer.to_string()]),
            signer: Ok(signer.to_string()),
            balance: Rc::new(RefCell::new(Ok(ether(2)))),
            gate: None,
            replies: RefCell::new(VecDeque::new()),
            balance_gate: None,
            account_requests: Rc::new(Cell::new(0)),
        }
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    pub fn rejecting(mut self, message: &str) -> Self {
        self.accounts = Err(WalletError::Rejected(message.to_string()));
        self
    }

    /// Hold `request_accounts` until the returned handle is notified
    pub fn gated(mut self) -> (Self, Rc<Notify>) {
        let gate = Rc::new(Notify::new());
        self.gate = Some(gate.clone());
        (self, gate)
    }

    /// Answer successive `request_accounts` calls with `replies` in order,
    /// each held until its own handle is notified
    pub fn scripted(self, replies: Vec<Result<Vec<String>>>) -> (Self, Vec<Rc<Notify>>) {
        let gates: Vec<_> = replies.iter().map(|_| Rc::new(Notify::new())).collect();
        self.replies
            .borrow_mut()
            .extend(replies.into_iter().zip(gates.iter().cloned()));
        (self, gates)
    }

    /// Hold `get_balance` until the returned handle is notified
    pub fn gated_balance(mut self) -> (Self, Rc<Notify>) {
        let gate = Rc::new(Notify::new());
        self.balance_gate = Some(gate.clone());
        (self, gate)
    }
}

#[async_trait(?Send)]
impl WalletProvider for MockProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn is_available(&self) -> bool {
        self.available
    }

    async fn request_accounts(&self) -> Result<Vec<String>> {
        self.account_requests.set(self.account_requests.get() + 1);
        let scripted = self.replies.borrow_mut().pop_front();
        if let Some((reply, gate)) = scripted {
            gate.notified().await;
            return reply;
        }
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.accounts.clone()
    }

    async fn signer_address(&self) -> Result<String> {
        self.signer.clone()
    }

    async fn get_balance(&self, _address: Address) -> Result<U256> {
        if let Some(gate) = &self.balance_gate {
            gate.notified().await;
        }
        self.balance.borrow().clone()
    }
}

/// Collects alert messages
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub alerts: Rc<RefCell<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn count(&self) -> usize {
        self.alerts.borrow().len()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// Swap backend that always fails
pub struct FailingSwap;

#[async_trait(?Send)]
impl SwapBackend for FailingSwap {
    async fn execute(&self, _input: &SwapFormInput) -> Result<()> {
        Err(WalletError::Swap("backend unavailable".into()))
    }
}

/// Swap backend that waits for a notification before succeeding
pub struct GatedSwap(pub Rc<Notify>);

#[async_trait(?Send)]
impl SwapBackend for GatedSwap {
    async fn execute(&self, _input: &SwapFormInput) -> Result<()> {
        self.0.notified().await;
        Ok(())
    }
}
