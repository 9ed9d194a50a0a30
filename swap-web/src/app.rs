//! Wallet Swap Widget - Leptos Frontend

use leptos::prelude::*;

use crate::components::Navbar;
use crate::pages::SwapPage;
use crate::state::widget::provide_widget_context;

#[component]
pub fn App() -> impl IntoView {
    provide_widget_context();

    view! {
        <div class="app-container">
            <Navbar/>
            <SwapPage/>
        </div>
    }
}
