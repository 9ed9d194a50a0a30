//! Ethereum Wallet Adapters via wasm-bindgen
//!
//! JavaScript interop for the two provider kinds the widget supports:
//! the injected `window.ethereum` object and a WalletConnect session built
//! from the `@walletconnect/web3-provider` UMD bundle loaded by `index.html`.

use std::cell::RefCell;

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use lib_wallet::balance::parse_quantity;
use lib_wallet::config::CREDENTIAL_ENV;
use lib_wallet::{ProviderKind, Result, WalletError, WalletProvider};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// ============================================================================
// JAVASCRIPT INTEROP
// ============================================================================

#[wasm_bindgen(inline_js = "
export function injectedProvider() {
    if (typeof window !== 'undefined' && window.ethereum) {
        return window.ethereum;
    }
    return null;
}

export function remoteSessionSupported() {
    return typeof window !== 'undefined' && typeof window.WalletConnectProvider !== 'undefined';
}

export function createRemoteSession(infuraId) {
    const Ctor = window.WalletConnectProvider.default || window.WalletConnectProvider;
    return new Ctor({ infuraId });
}

export async function enableSession(provider) {
    return await provider.enable();
}

export async function providerRequest(provider, method, params) {
    if (params === undefined) {
        return await provider.request({ method });
    }
    return await provider.request({ method, params });
}
")]
extern "C" {
    /// `window.ethereum`, or null when no extension injected one
    #[wasm_bindgen(js_name = injectedProvider)]
    fn injected_provider() -> JsValue;

    #[wasm_bindgen(js_name = remoteSessionSupported)]
    fn remote_session_supported() -> bool;

    #[wasm_bindgen(js_name = createRemoteSession, catch)]
    fn create_remote_session(infura_id: &str) -> std::result::Result<JsValue, JsValue>;

    /// Opens the pairing modal and resolves with the approved accounts
    #[wasm_bindgen(js_name = enableSession, catch)]
    async fn enable_session(provider: &JsValue) -> std::result::Result<JsValue, JsValue>;

    /// EIP-1193 `request({ method, params })`
    #[wasm_bindgen(js_name = providerRequest, catch)]
    async fn provider_request(
        provider: &JsValue,
        method: &str,
        params: JsValue,
    ) -> std::result::Result<JsValue, JsValue>;
}

/// Best-effort message from a thrown JS value.
///
/// Wallets throw `Error` instances or plain `{ code, message }` objects.
fn js_error_message(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    if let Some(s) = err.as_string() {
        return s;
    }
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

fn rejected(err: JsValue) -> WalletError {
    WalletError::Rejected(js_error_message(&err))
}

fn decode_accounts(value: JsValue) -> Result<Vec<String>> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| WalletError::Rejected(format!("unexpected account list: {}", e)))
}

async fn first_account(provider: &JsValue) -> Result<String> {
    let value = provider_request(provider, "eth_accounts", JsValue::UNDEFINED)
        .await
        .map_err(rejected)?;
    decode_accounts(value)?
        .into_iter()
        .next()
        .ok_or(WalletError::NoAccounts)
}

async fn balance_of(provider: &JsValue, address: Address) -> Result<U256> {
    let params = serde_wasm_bindgen::to_value(&[address.to_string(), "latest".to_string()])
        .map_err(|e| WalletError::Balance(e.to_string()))?;
    let value = provider_request(provider, "eth_getBalance", params)
        .await
        .map_err(|e| WalletError::Balance(js_error_message(&e)))?;
    let raw = value
        .as_string()
        .ok_or_else(|| WalletError::Balance("balance is not a string".to_string()))?;
    parse_quantity(&raw).ok_or_else(|| WalletError::Balance(format!("invalid quantity {}", raw)))
}

// ============================================================================
// INJECTED WALLET
// ============================================================================

/// Browser extension wallet exposed as `window.ethereum`
#[derive(Debug, Default, Clone, Copy)]
pub struct InjectedWallet;

impl InjectedWallet {
    fn provider(&self) -> Result<JsValue> {
        let provider = injected_provider();
        if provider.is_null() || provider.is_undefined() {
            return Err(WalletError::NoProvider);
        }
        Ok(provider)
    }
}

#[async_trait(?Send)]
impl WalletProvider for InjectedWallet {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Injected
    }

    fn is_available(&self) -> bool {
        self.provider().is_ok()
    }

    async fn request_accounts(&self) -> Result<Vec<String>> {
        let provider = self.provider()?;
        let value = provider_request(&provider, "eth_requestAccounts", JsValue::UNDEFINED)
            .await
            .map_err(rejected)?;
        decode_accounts(value)
    }

    async fn signer_address(&self) -> Result<String> {
        first_account(&self.provider()?).await
    }

    async fn get_balance(&self, address: Address) -> Result<U256> {
        balance_of(&self.provider()?, address).await
    }
}

// ============================================================================
// REMOTE SESSION (WALLETCONNECT)
// ============================================================================

/// WalletConnect pairing session, created on the first account request
pub struct WalletConnectSession {
    credential: Option<String>,
    session: RefCell<Option<JsValue>>,
}

impl WalletConnectSession {
    pub fn new(credential: Option<&str>) -> Self {
        Self {
            credential: credential.map(str::to_string),
            session: RefCell::new(None),
        }
    }

    fn session(&self) -> Result<JsValue> {
        self.session.borrow().clone().ok_or(WalletError::NotConnected)
    }
}

#[async_trait(?Send)]
impl WalletProvider for WalletConnectSession {
    fn kind(&self) -> ProviderKind {
        ProviderKind::RemoteSession
    }

    fn is_available(&self) -> bool {
        remote_session_supported()
    }

    async fn request_accounts(&self) -> Result<Vec<String>> {
        let infura_id = self
            .credential
            .as_deref()
            .ok_or(WalletError::MissingCredential(CREDENTIAL_ENV))?;
        // a v1 provider keeps its pairing, so `enable()` on it resumes the
        // earlier session instead of opening a second one
        let existing = self.session.borrow().clone();
        let provider = match existing {
            Some(provider) => provider,
            None => {
                let provider = create_remote_session(infura_id).map_err(rejected)?;
                log::info!("WalletConnect provider created, waiting for session approval");
                provider
            }
        };

        let accounts = enable_session(&provider).await.map_err(rejected)?;
        *self.session.borrow_mut() = Some(provider);
        decode_accounts(accounts)
    }

    async fn signer_address(&self) -> Result<String> {
        first_account(&self.session()?).await
    }

    async fn get_balance(&self, address: Address) -> Result<U256> {
        balance_of(&self.session()?, address).await
    }
}
