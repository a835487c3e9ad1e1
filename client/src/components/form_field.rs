//! Labelled input with an inline field error.

use leptos::prelude::*;

#[component]
pub fn FormField(
    label: &'static str,
    /// Extra text shown after the label, e.g. the usual range.
    #[prop(optional, into)]
    hint: Option<Signal<String>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] step: Option<&'static str>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<&'static str>,
) -> impl IntoView {
    view! {
        <div class="field" class:field--invalid=move || !error.get().is_empty()>
            <label class="field__label">
                {label}
                {move || hint.map(|hint| view! { <span class="field__hint">{format!(" ({})", hint.get())}</span> })}
            </label>
            <input
                class="field__input"
                type=input_type
                placeholder=placeholder
                step=step
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || !error.get().is_empty()>
                <span class="field__error">{move || error.get()}</span>
            </Show>
        </div>
    }
}
