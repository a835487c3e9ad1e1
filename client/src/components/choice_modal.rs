//! Post-submit modal: follow a link or stay on the page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ChoiceModal(
    title: &'static str,
    #[prop(into)] message: Signal<String>,
    primary_label: &'static str,
    primary_href: &'static str,
    secondary_label: &'static str,
    on_secondary: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog__backdrop">
            <div class="dialog" role="dialog">
                <h2>{title}</h2>
                <p>{move || message.get()}</p>
                <div class="dialog__actions">
                    <button class="btn btn--outline" type="button" on:click=move |_| on_secondary.run(())>
                        {secondary_label}
                    </button>
                    <A href=primary_href attr:class="btn btn--primary">{primary_label}</A>
                </div>
            </div>
        </div>
    }
}
