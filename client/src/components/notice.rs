//! Success / error / progress lines for a `RequestState`.

use leptos::prelude::*;

use crate::state::request::RequestState;

#[component]
pub fn Notice(state: RwSignal<RequestState>) -> impl IntoView {
    view! {
        <Show when=move || state.get().is_busy()>
            <p class="notice notice--busy">{move || state.get().busy.unwrap_or_default()}</p>
        </Show>
        <Show when=move || state.get().message.is_some()>
            <p class="notice notice--success">{move || state.get().message.unwrap_or_default()}</p>
        </Show>
        <Show when=move || state.get().error.is_some()>
            <p class="notice notice--error">{move || state.get().error.unwrap_or_default()}</p>
        </Show>
    }
}
