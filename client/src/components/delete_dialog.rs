//! Delete confirmation dialog asking the owner to retype their identity.

use leptos::prelude::*;
use loans::confirm::DeleteConfirmation;

#[component]
pub fn DeleteDialog(
    loan_id: i64,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] problem: Signal<Option<String>>,
    on_confirm: Callback<DeleteConfirmation>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let full_name = RwSignal::new(String::new());
    let id_number = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_confirm.run(DeleteConfirmation::new(full_name.get(), id_number.get()));
    };

    view! {
        <div class="dialog__backdrop" on:click=move |_| on_cancel.run(())>
            <form class="dialog" on:click=move |ev| ev.stop_propagation() on:submit=on_submit>
                <h2>{format!("Eliminar Solicitud #{loan_id}")}</h2>
                <p>
                    "¿Está seguro de que desea eliminar esta solicitud? Esta acción no se puede deshacer. "
                    "Confirme su nombre completo y número de identificación."
                </p>
                <label>"Nombre Completo"</label>
                <input
                    type="text"
                    prop:value=move || full_name.get()
                    on:input=move |ev| full_name.set(event_target_value(&ev))
                />
                <label>"Número de Identificación"</label>
                <input
                    type="text"
                    prop:value=move || id_number.get()
                    on:input=move |ev| id_number.set(event_target_value(&ev))
                />
                <Show when=move || problem.get().is_some()>
                    <p class="notice notice--error">{move || problem.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn btn--outline" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button class="btn btn--danger" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Eliminando..." } else { "Eliminar" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
