//! Staff screen: evaluate applications and force status changes.
//!
//! The login here is the non-authoritative `StaffGate`; the backend does not
//! check who calls the evaluation endpoints.

#[cfg(test)]
#[path = "loan_evaluation_test.rs"]
mod loan_evaluation_test;

use leptos::prelude::*;
use loans::status;
use loans::types::{LoanApplication, format_money};

use crate::components::back_button::BackButton;
use crate::components::notice::Notice;
use crate::state::request::RequestState;

/// Decided applications cannot be re-evaluated.
pub(crate) fn can_evaluate(loan: &LoanApplication) -> bool {
    loan.id.is_some() && !loan.status.as_deref().is_some_and(status::is_final)
}

/// Trimmed target status; blank input is not sent.
pub(crate) fn new_status_input(raw: &str) -> Option<String> {
    let value = raw.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

#[cfg(feature = "csr")]
fn load_loans(list: RwSignal<Vec<LoanApplication>>, request: RwSignal<RequestState>) {
    leptos::task::spawn_local(async move {
        match crate::net::api::list_loans().await {
            Ok(found) => list.set(found),
            Err(err) => request.update(|r| r.fail(err.user_message(loans::errors::EVALUATION_LIST_FAILED))),
        }
    });
}

#[component]
pub fn LoanEvaluationPage() -> impl IntoView {
    let gate = StoredValue::new(crate::config::staff_gate());
    let unlocked = RwSignal::new(false);
    let staff_user = RwSignal::new(String::new());
    let staff_password = RwSignal::new(String::new());
    let login_error = RwSignal::new(None::<String>);

    let list = RwSignal::new(Vec::<LoanApplication>::new());
    let request = RwSignal::new(RequestState::default());

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match gate.with_value(|gate| gate.check(&staff_user.get_untracked(), &staff_password.get_untracked())) {
            Ok(()) => {
                login_error.set(None);
                staff_password.set(String::new());
                unlocked.set(true);
                #[cfg(feature = "csr")]
                load_loans(list, request);
            }
            Err(denied) => login_error.set(Some(denied.to_string())),
        }
    };

    let evaluate = move |id: i64| {
        if request.get_untracked().is_busy() {
            return;
        }
        request.update(|r| {
            r.begin("Evaluando solicitud...");
        });
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::evaluate_loan(id).await {
                Ok(verdict) => {
                    request.update(|r| r.succeed(verdict));
                    load_loans(list, request);
                }
                Err(err) => request.update(|r| r.fail(err.user_message(loans::errors::EVALUATE_FAILED))),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = id;
    };

    let change_status = move |id: i64, new_status: String| {
        if request.get_untracked().is_busy() {
            return;
        }
        request.update(|r| {
            r.begin("Actualizando estado...");
        });
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::change_status(id, &new_status).await {
                Ok(body) => {
                    request.update(|r| r.succeed(status::change_summary(id, &new_status, &body)));
                    load_loans(list, request);
                }
                Err(err) => request.update(|r| r.fail(err.user_message(loans::errors::STATUS_CHANGE_FAILED))),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (id, new_status);
    };

    view! {
        <section class="page evaluation-page">
            <BackButton/>
            <h2>"Evaluación de Solicitudes"</h2>
            <Show
                when=move || unlocked.get()
                fallback=move || {
                    view! {
                        <form class="form form--narrow" on:submit=on_login>
                            <p>"Acceso exclusivo para ejecutivos."</p>
                            <div class="field">
                                <label class="field__label">"Usuario"</label>
                                <input
                                    class="field__input"
                                    type="text"
                                    prop:value=move || staff_user.get()
                                    on:input=move |ev| staff_user.set(event_target_value(&ev))
                                />
                            </div>
                            <div class="field">
                                <label class="field__label">"Contraseña"</label>
                                <input
                                    class="field__input"
                                    type="password"
                                    prop:value=move || staff_password.get()
                                    on:input=move |ev| staff_password.set(event_target_value(&ev))
                                />
                            </div>
                            <Show when=move || login_error.get().is_some()>
                                <p class="notice notice--error">{move || login_error.get().unwrap_or_default()}</p>
                            </Show>
                            <button class="btn btn--primary" type="submit">"Ingresar"</button>
                        </form>
                    }
                }
            >
                <Notice state=request/>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Solicitante"</th>
                            <th>"Tipo Préstamo"</th>
                            <th>"Monto"</th>
                            <th>"Estado"</th>
                            <th>"Acción"</th>
                            <th>"Cambiar Estado"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || list.get()
                            key=|loan| (loan.id, loan.status.clone())
                            children=move |loan| {
                                let draft = RwSignal::new(String::new());
                                let id = loan.id.unwrap_or_default();
                                let evaluable = can_evaluate(&loan);
                                let has_id = loan.id.is_some();
                                view! {
                                    <tr>
                                        <td>{loan.id.map(|id| id.to_string()).unwrap_or_default()}</td>
                                        <td>{loan.owner_full_name().unwrap_or_default().to_owned()}</td>
                                        <td>{loan.loan_type_label().unwrap_or_default()}</td>
                                        <td>{loan.requested_amount.map(format_money).unwrap_or_default()}</td>
                                        <td>{loan.status.as_deref().map(status::label).unwrap_or_default()}</td>
                                        <td>
                                            <button
                                                class="btn btn--primary btn--small"
                                                type="button"
                                                disabled=move || !evaluable || request.get().is_busy()
                                                on:click=move |_| evaluate(id)
                                            >
                                                "Evaluar"
                                            </button>
                                        </td>
                                        <td class="evaluation-page__status">
                                            <input
                                                class="field__input"
                                                type="text"
                                                placeholder="E4_PRE_APROBADA"
                                                prop:value=move || draft.get()
                                                on:input=move |ev| draft.set(event_target_value(&ev))
                                            />
                                            <button
                                                class="btn btn--outline btn--small"
                                                type="button"
                                                disabled=move || {
                                                    !has_id || new_status_input(&draft.get()).is_none() || request.get().is_busy()
                                                }
                                                on:click=move |_| {
                                                    if let Some(new_status) = new_status_input(&draft.get_untracked()) {
                                                        change_status(id, new_status);
                                                    }
                                                }
                                            >
                                                "Aplicar"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
