//! Navigation Bar Component

use leptos::prelude::*;
use shared::utils::truncate_address;

use crate::state::widget::use_widget_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_widget_context();

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <span class="nav-title">"Swap"</span>
                <span style="font-family: monospace; color: #9ca3af;">
                    {move || ctx.view.with(|s| s.session.address().map(|a| truncate_address(&a.to_string())))}
                </span>
            </div>
        </nav>
    }
}
