//! Status Banner Component
//!
//! Dismissible message for failed requests.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::BoardStateStoreFields;

#[component]
pub fn StatusBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    move || {
        store.status().get().map(|message| {
            view! {
                <div class="status-banner" role="alert">
                    <span class="status-text">{message}</span>
                    <button
                        class="close-btn"
                        title=ctx.strings().dismiss
                        on:click=move |_| ctx.dismiss_status()
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
