//! Mortgage application form with document upload.
//!
//! Documents are validated from their metadata when picked; the `File`
//! handles are read back from the inputs on submit and sent as multipart
//! parts alongside the text fields.

#[cfg(test)]
#[path = "loan_application_test.rs"]
mod loan_application_test;

use leptos::html::Input;
use leptos::prelude::*;
use loans::types::LoanType;
use loans::validation::{DOCUMENT_ACCEPT, Field, FieldErrors, LoanApplicationForm};

use crate::app::STATUS_PATH;
use crate::components::back_button::BackButton;
use crate::components::choice_modal::ChoiceModal;
use crate::components::form_field::FormField;
use crate::components::notice::Notice;
use crate::components::requirements_panel::RequirementsPanel;
use crate::state::request::RequestState;
use crate::util::files::describe;
use crate::util::forms::{field_error, loan_type_from_select, loan_type_to_select};

pub(crate) fn initial_form() -> LoanApplicationForm {
    LoanApplicationForm { loan_type: Some(LoanType::FirstHome), ..LoanApplicationForm::default() }
}

pub(crate) fn created_message(id: Option<i64>) -> String {
    match id {
        Some(id) => format!("Su solicitud #{id} fue registrada y está en revisión inicial."),
        None => "Su solicitud fue registrada y está en revisión inicial.".to_owned(),
    }
}

pub(crate) fn term_hint(loan_type: Option<LoanType>) -> String {
    loan_type.map_or_else(|| "años".to_owned(), |t| loans::requirements::requirements_for(t).term_hint())
}

#[component]
pub fn LoanApplicationPage() -> impl IntoView {
    let form = RwSignal::new(initial_form());
    let errors = RwSignal::new(FieldErrors::new());
    let request = RwSignal::new(RequestState::default());
    let created = RwSignal::new(None::<Option<i64>>);
    let income_ref = NodeRef::<Input>::new();
    let appraisal_ref = NodeRef::<Input>::new();

    let error_for = move |field: Field| Signal::derive(move || errors.with(|e| field_error(e, field)));

    let on_income_change = move |_| {
        #[cfg(feature = "csr")]
        {
            let file = income_ref.get_untracked().and_then(|input| crate::util::files::selected_file(&input));
            form.update(|f| f.income_proof = file.as_ref().map(crate::util::files::file_meta));
        }
    };
    let on_appraisal_change = move |_| {
        #[cfg(feature = "csr")]
        {
            let file = appraisal_ref.get_untracked().and_then(|input| crate::util::files::selected_file(&input));
            form.update(|f| f.appraisal_proof = file.as_ref().map(crate::util::files::file_meta));
        }
    };

    let reset = Callback::new(move |()| {
        form.set(initial_form());
        errors.set(FieldErrors::new());
        request.update(RequestState::clear);
        created.set(None);
        #[cfg(feature = "csr")]
        for input in [income_ref.get_untracked(), appraisal_ref.get_untracked()].into_iter().flatten() {
            input.set_value("");
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if request.get_untracked().is_busy() {
            return;
        }
        let draft = match form.get_untracked().validate() {
            Ok(draft) => draft,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());

        #[cfg(feature = "csr")]
        {
            use crate::util::files::selected_file;

            let income = income_ref.get_untracked().and_then(|input| selected_file(&input));
            let appraisal = appraisal_ref.get_untracked().and_then(|input| selected_file(&input));
            let (Some(income), Some(appraisal)) = (income, appraisal) else {
                request.update(|r| r.fail(loans::errors::CREATE_LOAN_FAILED));
                return;
            };
            request.update(|r| {
                r.begin("Enviando solicitud...");
            });
            leptos::task::spawn_local(async move {
                match crate::net::api::create_loan(&draft, &income, &appraisal).await {
                    Ok(loan) => {
                        log::info!("created loan application {:?}", loan.id);
                        request.update(RequestState::settle);
                        created.set(Some(loan.id));
                    }
                    Err(err) => request.update(|r| r.fail(err.user_message(loans::errors::CREATE_LOAN_FAILED))),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = draft;
    };

    view! {
        <section class="page form-page">
            <BackButton/>
            <h2>"Solicitud de Crédito Hipotecario"</h2>
            <div class="form-page__layout">
                <form class="form" on:submit=on_submit>
                    <FormField
                        label="Nombre Completo *"
                        value=Signal::derive(move || form.with(|f| f.full_name.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.full_name = v))
                        error=error_for(Field::FullName)
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
                        label="Monto Solicitado *"
                        input_type="number"
                        step="0.01"
                        value=Signal::derive(move || form.with(|f| f.amount.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.amount = v))
                        error=error_for(Field::Amount)
                    />
                    <FormField
                        label="Plazo Solicitado *"
                        hint=Signal::derive(move || term_hint(form.with(|f| f.loan_type)))
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
                    <FormField
                        label="Valor de la Propiedad"
                        input_type="number"
                        step="0.01"
                        value=Signal::derive(move || form.with(|f| f.property_value.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.property_value = v))
                        error=error_for(Field::PropertyValue)
                    />

                    <div class="field" class:field--invalid=move || errors.with(|e| e.get(Field::IncomeProof).is_some())>
                        <label class="field__label">"Comprobante de Ingresos *"</label>
                        <input type="file" accept=DOCUMENT_ACCEPT node_ref=income_ref on:change=on_income_change/>
                        <span class="field__file">{move || form.with(|f| f.income_proof.as_ref().map(describe)).unwrap_or_default()}</span>
                        <span class="field__error">{move || error_for(Field::IncomeProof).get()}</span>
                    </div>
                    <div class="field" class:field--invalid=move || errors.with(|e| e.get(Field::AppraisalProof).is_some())>
                        <label class="field__label">"Comprobante de Avalúo *"</label>
                        <input type="file" accept=DOCUMENT_ACCEPT node_ref=appraisal_ref on:change=on_appraisal_change/>
                        <span class="field__file">{move || form.with(|f| f.appraisal_proof.as_ref().map(describe)).unwrap_or_default()}</span>
                        <span class="field__error">{move || error_for(Field::AppraisalProof).get()}</span>
                    </div>

                    <Notice state=request/>
                    <div class="form__actions">
                        <button class="btn btn--outline" type="button" on:click=move |_| reset.run(())>
                            "Limpiar"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || request.get().is_busy()>
                            {move || if request.get().is_busy() { "Enviando..." } else { "Enviar Solicitud" }}
                        </button>
                    </div>
                </form>

                <RequirementsPanel
                    loan_type=Signal::derive(move || form.with(|f| f.loan_type))
                    term=Signal::derive(move || form.with(|f| f.term.clone()))
                    rate=Signal::derive(move || form.with(|f| f.rate.clone()))
                />
            </div>

            <Show when=move || created.get().is_some()>
                <ChoiceModal
                    title="Solicitud enviada"
                    message=Signal::derive(move || created_message(created.get().flatten()))
                    primary_label="Ver Estado de Solicitudes"
                    primary_href=STATUS_PATH
                    secondary_label="Nueva Solicitud"
                    on_secondary=reset
                />
            </Show>
        </section>
    }
}
