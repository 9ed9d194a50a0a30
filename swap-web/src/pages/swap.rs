//! Swap Page - wallet connection, swap form and history

use leptos::prelude::*;
use lib_wallet::WalletSession;
use shared::SwapFormInput;

use crate::components::SwapHistoryList;
use crate::state::widget::use_widget_context;
use crate::utils::constants::{SOURCE_ASSET, TARGET_ASSET};
use crate::utils::format::balance_label;

/// Swap form field bound to an input element
#[derive(Clone, Copy)]
enum Field {
    SourceAmount,
    TargetAmount,
    DestinationAddress,
}

impl Field {
    fn label(self) -> String {
        match self {
            Field::SourceAmount => format!("Send {}", SOURCE_ASSET),
            Field::TargetAmount => format!("Receive {}", TARGET_ASSET),
            Field::DestinationAddress => "Receive address".to_string(),
        }
    }

    fn get(self, form: &SwapFormInput) -> String {
        match self {
            Field::SourceAmount => form.source_amount.clone(),
            Field::TargetAmount => form.target_amount.clone(),
            Field::DestinationAddress => form.destination_address.clone(),
        }
    }

    fn set(self, form: &mut SwapFormInput, value: String) {
        match self {
            Field::SourceAmount => form.source_amount = value,
            Field::TargetAmount => form.target_amount = value,
            Field::DestinationAddress => form.destination_address = value,
        }
    }
}

#[component]
fn FormInput(field: Field) -> impl IntoView {
    let ctx = use_widget_context();

    view! {
        <div style="margin-bottom: 16px;">
            <label style="display: block; font-size: 14px;">{field.label()}</label>
            <input
                type="text"
                style="width: 100%; padding: 8px; margin-top: 4px; background: #374151; border-radius: 4px; color: #ffffff;"
                prop:value=move || ctx.view.with(|s| field.get(&s.form))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.update_form(move |form| field.set(form, value));
                }
            />
        </div>
    }
}

#[component]
fn WalletPanel() -> impl IntoView {
    let ctx = use_widget_context();

    move || {
        let snapshot = ctx.view.get();
        match snapshot.session {
            WalletSession::Connected { address, .. } => view! {
                <div>
                    <p style="margin-bottom: 16px; word-break: break-all;">
                        "Connected Address: " {address.to_string()}
                    </p>
                    <p style="margin-bottom: 16px;">
                        "Balance: " {balance_label(snapshot.balance.as_deref())}
                    </p>
                    <button
                        class="btn"
                        style="width: 100%; margin-bottom: 16px; background: #dc2626;"
                        on:click=move |_| ctx.disconnect()
                    >
                        "Disconnect Wallet"
                    </button>
                </div>
            }.into_any(),
            session => {
                let connecting = session.is_connecting();
                view! {
                    <button
                        class="btn"
                        style="width: 100%; margin-bottom: 16px; background: #2563eb;"
                        disabled=connecting
                        on:click=move |_| ctx.connect()
                    >
                        {if connecting { "Connecting..." } else { "Connect Wallet" }}
                    </button>
                }.into_any()
            }
        }
    }
}

#[component]
pub fn SwapPage() -> impl IntoView {
    let ctx = use_widget_context();
    let submitting = move || ctx.view.with(|s| s.submitting);

    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px); padding: 16px;">
            <div class="card" style="width: 100%; max-width: 512px; padding: 32px; background: #1f2937; color: #ffffff; border-radius: 8px;">
                <h1 style="font-size: 24px; margin-bottom: 16px;">"Swap"</h1>

                <WalletPanel/>

                <FormInput field=Field::SourceAmount/>
                <FormInput field=Field::TargetAmount/>
                <FormInput field=Field::DestinationAddress/>

                <button
                    class="btn"
                    style="width: 100%; background: #16a34a;"
                    disabled=submitting
                    on:click=move |_| ctx.submit_swap()
                >
                    {move || if submitting() { "Swapping..." } else { "Swap" }}
                </button>

                <SwapHistoryList/>
            </div>
        </div>
    }
}
