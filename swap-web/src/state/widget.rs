//! Widget state management
//!
//! The controller from `lib-wallet` owns the state; the view reads a
//! snapshot signal that the controller refreshes after every change.

use std::rc::Rc;

use leptos::prelude::*;
use lib_wallet::{ProviderChain, SwapHistory, SwapWidget, WidgetConfig, WidgetSnapshot};
use shared::SwapFormInput;

use crate::services::{BrowserNotifier, InjectedWallet, WalletConnectSession};
use crate::utils::constants::INFURA_ID;

/// Widget context shared by the page components
#[derive(Clone, Copy)]
pub struct WidgetContext {
    pub view: RwSignal<WidgetSnapshot>,
    widget: StoredValue<Rc<SwapWidget>, LocalStorage>,
}

impl WidgetContext {
    pub fn new() -> Self {
        let view = RwSignal::new(WidgetSnapshot::default());

        let config = WidgetConfig::new(INFURA_ID);
        if let Err(e) = config.validate() {
            log::warn!("Invalid widget configuration: {}", e);
        }
        if config.credential().is_none() {
            log::info!("INFURA_ID not set at build time, WalletConnect fallback disabled");
        }

        let providers = ProviderChain::new()
            .with(InjectedWallet)
            .with(WalletConnectSession::new(config.credential()));

        let widget = SwapWidget::new(providers, config)
            .with_history(SwapHistory::with_demo_records())
            .with_notifier(BrowserNotifier)
            .on_change(move |snapshot| view.set(snapshot.clone()));
        view.set(widget.snapshot());

        Self {
            view,
            widget: StoredValue::new_local(Rc::new(widget)),
        }
    }

    fn widget(&self) -> Rc<SwapWidget> {
        self.widget.get_value()
    }

    pub fn connect(&self) {
        let widget = self.widget();
        leptos::task::spawn_local(async move {
            if let Err(e) = widget.connect().await {
                log::debug!("Connect ended without a session: {}", e);
            }
        });
    }

    pub fn disconnect(&self) {
        self.widget().disconnect();
    }

    pub fn submit_swap(&self) {
        let widget = self.widget();
        leptos::task::spawn_local(async move {
            if let Err(e) = widget.submit_swap().await {
                log::debug!("Swap not recorded: {}", e);
            }
        });
    }

    pub fn update_form(&self, edit: impl FnOnce(&mut SwapFormInput)) {
        self.widget().update_form(edit);
    }
}

pub fn provide_widget_context() -> WidgetContext {
    let context = WidgetContext::new();
    provide_context(context);
    context
}

pub fn use_widget_context() -> WidgetContext {
    expect_context::<WidgetContext>()
}
