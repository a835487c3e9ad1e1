//! Loan simulation: the backend computes, the page only collects and renders.

#[cfg(test)]
#[path = "simulation_test.rs"]
mod simulation_test;

use leptos::prelude::*;
use loans::types::{LoanType, SimulationResult, format_money};
use loans::validation::{Field, FieldErrors, SimulationForm};

use crate::components::back_button::BackButton;
use crate::components::form_field::FormField;
use crate::components::notice::Notice;
use crate::components::requirements_panel::RequirementsPanel;
use crate::state::request::RequestState;
use crate::util::forms::{field_error, loan_type_from_select, loan_type_to_select};

pub(crate) fn initial_form() -> SimulationForm {
    SimulationForm { loan_type: Some(LoanType::FirstHome), ..SimulationForm::default() }
}

fn money(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_owned(), format_money)
}

/// Label/value rows for a simulation result; optional figures are skipped.
pub(crate) fn result_rows(result: &SimulationResult) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Cuota Mensual", money(result.monthly_payment)),
        ("Total Pagado", money(result.total_paid)),
        ("Total Intereses", money(result.total_interest)),
    ];
    if let Some(costs) = result.additional_costs {
        rows.push(("Costos Adicionales", format_money(costs)));
    }
    if let Some(total) = result.final_total {
        rows.push(("Total Final", format_money(total)));
    }
    rows
}

#[component]
pub fn SimulationPage() -> impl IntoView {
    let form = RwSignal::new(initial_form());
    let errors = RwSignal::new(FieldErrors::new());
    let request = RwSignal::new(RequestState::default());
    let result = RwSignal::new(None::<SimulationResult>);

    let error_for = move |field: Field| Signal::derive(move || errors.with(|e| field_error(e, field)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if request.get_untracked().is_busy() {
            return;
        }
        let body = match form.get_untracked().validate() {
            Ok(body) => body,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        result.set(None);
        request.update(|r| {
            r.begin("Simulando...");
        });

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::simulate(&body).await {
                Ok(simulated) => {
                    result.set(Some(simulated));
                    request.update(|r| r.succeed("Simulación exitosa."));
                }
                Err(err) => request.update(|r| r.fail(err.detailed_message(loans::errors::SIMULATE_FAILED))),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = body;
    };

    view! {
        <section class="page form-page">
            <BackButton/>
            <h2>"Simulación de Crédito"</h2>
            <div class="form-page__layout">
                <form class="form" on:submit=on_submit>
                    <FormField
                        label="Monto Deseado *"
                        input_type="number"
                        step="0.01"
                        value=Signal::derive(move || form.with(|f| f.amount.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.amount = v))
                        error=error_for(Field::Amount)
                    />
                    <FormField
                        label="Plazo (años) *"
                        input_type="number"
                        step="1"
                        value=Signal::derive(move || form.with(|f| f.term.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.term = v))
                        error=error_for(Field::Term)
                    />
                    <FormField
                        label="Tasa de Interés Anual (%) *"
                        input_type="number"
                        step="0.01"
                        value=Signal::derive(move || form.with(|f| f.rate.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.rate = v))
                        error=error_for(Field::Rate)
                    />
                    <div class="field" class:field--invalid=move || errors.with(|e| e.get(Field::LoanType).is_some())>
                        <label class="field__label">"Tipo de Préstamo *"</label>
                        <select
                            class="field__input"
                            prop:value=move || form.with(|f| loan_type_to_select(f.loan_type))
                            on:change=move |ev| {
                                let loan_type = loan_type_from_select(&event_target_value(&ev));
                                form.update(|f| f.loan_type = loan_type);
                            }
                        >
                            <option value="">"Seleccione..."</option>
                            {LoanType::ALL
                                .iter()
                                .map(|t| view! { <option value=t.as_wire()>{t.display_name()}</option> })
                                .collect_view()}
                        </select>
                        <span class="field__error">{move || error_for(Field::LoanType).get()}</span>
                    </div>
                    <FormField
                        label="Costos de Seguros (opcional)"
                        input_type="number"
                        step="0.01"
                        value=Signal::derive(move || form.with(|f| f.insurance.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.insurance = v))
                        error=error_for(Field::Insurance)
                    />
                    <FormField
                        label="Comisiones (opcional)"
                        input_type="number"
                        step="0.01"
                        value=Signal::derive(move || form.with(|f| f.commissions.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.commissions = v))
                        error=error_for(Field::Commissions)
                    />

                    <Notice state=request/>
                    <button class="btn btn--primary" type="submit" disabled=move || request.get().is_busy()>
                        {move || if request.get().is_busy() { "Simulando..." } else { "Simular" }}
                    </button>
                </form>

                <RequirementsPanel
                    loan_type=Signal::derive(move || form.with(|f| f.loan_type))
                    term=Signal::derive(move || form.with(|f| f.term.clone()))
                    rate=Signal::derive(move || form.with(|f| f.rate.clone()))
                />
            </div>

            {move || {
                result
                    .get()
                    .map(|simulated| {
                        view! {
                            <div class="simulation__result">
                                <h3>"Resultado de la Simulación"</h3>
                                <dl>
                                    {result_rows(&simulated)
                                        .into_iter()
                                        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                                        .collect_view()}
                                </dl>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
