//! "Volver" button that steps back in browser history.

use leptos::prelude::*;

#[component]
pub fn BackButton() -> impl IntoView {
    let on_click = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(Err(err)) = web_sys::window().map(|w| w.history().and_then(|h| h.back())) {
                log::warn!("history back failed: {err:?}");
            }
        }
    };

    view! {
        <button class="btn btn--outline back-button" type="button" on:click=on_click>
            "← Volver"
        </button>
    }
}
