//! Wallet Swap Widget
//!
//! Connects an Ethereum wallet (injected or WalletConnect), shows its balance
//! and keeps a short history of simulated swaps. All state lives in
//! `lib-wallet`; this crate is the browser shell around it.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Wallet swap widget starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
