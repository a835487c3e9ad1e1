//! Application status lookup with owner-confirmed deletion.

#[cfg(test)]
#[path = "loan_status_test.rs"]
mod loan_status_test;

use leptos::prelude::*;
use loans::confirm::DeleteConfirmation;
use loans::status;
use loans::types::{LoanApplication, format_day, format_money};

use crate::components::back_button::BackButton;
use crate::components::delete_dialog::DeleteDialog;
use crate::components::notice::Notice;
use crate::state::request::RequestState;

const NOT_AVAILABLE: &str = "N/A";

pub(crate) const COLUMNS: [&str; 7] = [
    "ID Solicitud",
    "Fecha",
    "Monto",
    "Plazo",
    "Estado",
    "Comentarios",
    "Fecha de Aprobación/Rechazo",
];

/// Trimmed owner name, or `None` to list every application.
pub(crate) fn search_scope(raw: &str) -> Option<String> {
    let name = raw.trim();
    (!name.is_empty()).then(|| name.to_owned())
}

/// Table cells in `COLUMNS` order.
pub(crate) fn row_cells(loan: &LoanApplication) -> [String; 7] {
    let day = |raw: Option<&str>| raw.and_then(format_day).unwrap_or_else(|| NOT_AVAILABLE.to_owned());
    [
        loan.id.map_or_else(|| NOT_AVAILABLE.to_owned(), |id| id.to_string()),
        day(loan.submitted_at.as_deref()),
        loan.requested_amount.map_or_else(|| NOT_AVAILABLE.to_owned(), format_money),
        loan.term_years.map_or_else(|| NOT_AVAILABLE.to_owned(), |years| format!("{years} años")),
        loan.status.as_deref().map_or_else(|| NOT_AVAILABLE.to_owned(), status::label),
        loan.comments.clone().filter(|c| !c.trim().is_empty()).unwrap_or_else(|| NOT_AVAILABLE.to_owned()),
        day(loan.decided_at.as_deref()),
    ]
}

#[component]
pub fn LoanStatusPage() -> impl IntoView {
    let owner = RwSignal::new(String::new());
    let loans_found = RwSignal::new(Vec::<LoanApplication>::new());
    let searched = RwSignal::new(false);
    let request = RwSignal::new(RequestState::default());
    let pending_delete = RwSignal::new(None::<i64>);
    let delete_busy = RwSignal::new(false);
    let delete_problem = RwSignal::new(None::<String>);

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if request.get_untracked().is_busy() {
            return;
        }
        let scope = search_scope(&owner.get_untracked());
        loans_found.set(Vec::new());
        request.update(|r| {
            r.begin("Buscando solicitudes...");
        });

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = match scope.as_deref() {
                Some(name) => crate::net::api::loans_by_owner(name).await,
                None => crate::net::api::list_loans().await,
            };
            match outcome {
                Ok(found) => {
                    loans_found.set(found);
                    searched.set(true);
                    request.update(RequestState::settle);
                }
                Err(err) => request.update(|r| r.fail(err.user_message(loans::errors::LIST_LOANS_FAILED))),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = scope;
    };

    let on_delete_cancel = Callback::new(move |()| {
        pending_delete.set(None);
        delete_problem.set(None);
    });

    let on_delete_confirm = Callback::new(move |confirmation: DeleteConfirmation| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        if delete_busy.get_untracked() {
            return;
        }
        delete_busy.set(true);
        delete_problem.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use loans::errors::DELETE_LOAN_FAILED;

            let record = match crate::net::api::fetch_loan(id).await {
                Ok(Some(record)) => record,
                Ok(None) => {
                    delete_problem.set(Some(format!("La solicitud #{id} ya no existe")));
                    delete_busy.set(false);
                    return;
                }
                Err(err) => {
                    delete_problem.set(Some(err.user_message(DELETE_LOAN_FAILED)));
                    delete_busy.set(false);
                    return;
                }
            };
            if let Err(refused) = confirmation.verify(&record) {
                log::info!("delete of loan {id} refused: {refused}");
                delete_problem.set(Some(refused.to_string()));
                delete_busy.set(false);
                return;
            }
            match crate::net::api::delete_loan(id).await {
                Ok(()) => {
                    loans_found.update(|list| list.retain(|loan| loan.id != Some(id)));
                    pending_delete.set(None);
                    request.update(|r| r.succeed(format!("Solicitud #{id} eliminada.")));
                }
                Err(err) => {
                    pending_delete.set(None);
                    request.update(|r| r.fail(err.user_message(DELETE_LOAN_FAILED)));
                }
            }
            delete_busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = confirmation;
            delete_busy.set(false);
        }
    });

    view! {
        <section class="page status-page">
            <BackButton/>
            <h2>"Estado de sus Solicitudes"</h2>
            <form class="form form--inline" on:submit=on_search>
                <div class="field">
                    <label class="field__label">"Nombre Completo"</label>
                    <input
                        class="field__input"
                        type="text"
                        prop:value=move || owner.get()
                        on:input=move |ev| owner.set(event_target_value(&ev))
                    />
                    <span class="field__hint">
                        "Ingrese su nombre completo tal como está registrado; déjelo vacío para ver todas."
                    </span>
                </div>
                <button class="btn btn--primary" type="submit" disabled=move || request.get().is_busy()>
                    {move || if request.get().is_busy() { "Buscando..." } else { "Ver Solicitudes" }}
                </button>
            </form>
            <Notice state=request/>

            <Show when=move || searched.get() && loans_found.with(Vec::is_empty) && !request.get().is_busy()>
                <p class="status-page__empty">"No se encontraron solicitudes."</p>
            </Show>
            <Show when=move || !loans_found.with(Vec::is_empty)>
                <table class="table">
                    <thead>
                        <tr>
                            {COLUMNS.iter().map(|title| view! { <th>{*title}</th> }).collect_view()}
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || loans_found.get()
                            key=|loan| loan.id
                            children=move |loan| {
                                let cells = row_cells(&loan);
                                let id = loan.id;
                                view! {
                                    <tr>
                                        {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                        <td>
                                            <button
                                                class="btn btn--danger btn--small"
                                                type="button"
                                                disabled=id.is_none()
                                                on:click=move |_| {
                                                    delete_problem.set(None);
                                                    pending_delete.set(id);
                                                }
                                            >
                                                "Eliminar"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>

            {move || {
                pending_delete
                    .get()
                    .map(|loan_id| {
                        view! {
                            <DeleteDialog
                                loan_id=loan_id
                                busy=delete_busy
                                problem=delete_problem
                                on_confirm=on_delete_confirm
                                on_cancel=on_delete_cancel
                            />
                        }
                    })
            }}
        </section>
    }
}
