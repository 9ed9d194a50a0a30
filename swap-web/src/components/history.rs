//! Transaction History Component

use leptos::prelude::*;

use crate::state::widget::use_widget_context;
use crate::utils::constants::{SOURCE_ASSET, TARGET_ASSET};
use crate::utils::format::order_label;

#[component]
pub fn SwapHistoryList() -> impl IntoView {
    let ctx = use_widget_context();

    view! {
        <div style="margin-top: 24px;">
            <h2 style="font-size: 20px; margin-bottom: 16px;">"Transaction History"</h2>
            {move || {
                let history = ctx.view.with(|s| s.history.clone());
                if history.is_empty() {
                    return view! { <p>"No transactions yet."</p> }.into_any();
                }

                view! {
                    <div style="display: flex; flex-direction: column; gap: 12px;">
                        {history
                            .into_iter()
                            .enumerate()
                            .map(|(index, tx)| view! {
                                <div class="history-item" style="background: #374151; padding: 16px; border-radius: 8px;">
                                    <div style="display: flex; justify-content: space-between; margin-bottom: 8px;">
                                        <span>{order_label(index)}</span>
                                        <span>"Status: " {tx.status.label()}</span>
                                    </div>
                                    <div style="display: flex; justify-content: space-between; margin-bottom: 8px;">
                                        <span>{format!("{}: {}", SOURCE_ASSET, tx.source_amount)}</span>
                                        <span>{format!("{}: {}", TARGET_ASSET, tx.target_amount)}</span>
                                    </div>
                                    <p style="word-break: break-all;">"Receive Address: " {tx.destination_address}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}
