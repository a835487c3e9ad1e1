//! Applicant registration form.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use leptos::prelude::*;
use loans::types::{CreditHistory, SavingsCapacity};
use loans::validation::{Field, FieldErrors, RegistrationForm};

use crate::app::APPLY_PATH;
use crate::components::back_button::BackButton;
use crate::components::choice_modal::ChoiceModal;
use crate::components::form_field::FormField;
use crate::components::notice::Notice;
use crate::state::request::RequestState;
use crate::util::forms::{field_error, today};

#[cfg(any(test, feature = "csr"))]
pub(crate) const REGISTERED: &str = "Usuario registrado con éxito.";

pub(crate) fn welcome_message(full_name: &str) -> String {
    format!("{full_name} ya puede solicitar un crédito hipotecario. ¿Desea hacerlo ahora?")
}

type Read = fn(&RegistrationForm) -> String;
type Write = fn(&mut RegistrationForm, String);

/// Text inputs in display order: label, input type, field for errors, accessors.
const TEXT_FIELDS: &[(&str, &str, Option<Field>, Read, Write)] = &[
    ("Nombre Completo *", "text", Some(Field::FullName), |f| f.full_name.clone(), |f, v| f.full_name = v),
    ("Fecha de Nacimiento", "date", Some(Field::BirthDate), |f| f.birth_date.clone(), |f, v| f.birth_date = v),
    ("Tipo de Identificación", "text", None, |f| f.id_type.clone(), |f, v| f.id_type = v),
    ("Número de Identificación", "text", None, |f| f.id_number.clone(), |f, v| f.id_number = v),
    ("Estado Civil", "text", None, |f| f.marital_status.clone(), |f, v| f.marital_status = v),
    ("Dirección", "text", None, |f| f.address.clone(), |f, v| f.address = v),
    ("Teléfono", "tel", Some(Field::Phone), |f| f.phone.clone(), |f, v| f.phone = v),
    ("Correo Electrónico *", "email", Some(Field::Email), |f| f.email.clone(), |f, v| f.email = v),
    ("Ingresos Mensuales *", "number", Some(Field::MonthlyIncome), |f| f.monthly_income.clone(), |f, v| f.monthly_income = v),
    ("Deudas Actuales", "number", Some(Field::CurrentDebts), |f| f.current_debts.clone(), |f, v| f.current_debts = v),
    ("Tipo de Empleo", "text", None, |f| f.employment_type.clone(), |f, v| f.employment_type = v),
    ("Antigüedad Laboral (años)", "number", Some(Field::YearsEmployed), |f| f.years_employed.clone(), |f, v| f.years_employed = v),
    ("Saldo Cuenta de Ahorros", "number", Some(Field::SavingsBalance), |f| f.savings_balance.clone(), |f, v| f.savings_balance = v),
    ("Historial de Ahorro", "text", None, |f| f.savings_history.clone(), |f, v| f.savings_history = v),
    ("Número de Dependientes", "number", Some(Field::Dependents), |f| f.dependents.clone(), |f, v| f.dependents = v),
];

#[component]
pub fn RegistrationPage() -> impl IntoView {
    let form = RwSignal::new(RegistrationForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let request = RwSignal::new(RequestState::default());
    let registered = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if request.get_untracked().is_busy() {
            return;
        }
        let user = match form.get_untracked().validate(today()) {
            Ok(user) => user,
            Err(field_errors) => {
                errors.set(field_errors);
                request.update(RequestState::clear);
                return;
            }
        };
        errors.set(FieldErrors::new());
        request.update(|r| {
            r.begin("Registrando...");
        });

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register_user(&user).await {
                Ok(created) => {
                    log::info!("registered user {:?}", created.id);
                    request.update(|r| r.succeed(REGISTERED));
                    registered.set(Some(created.full_name));
                    form.set(RegistrationForm::default());
                }
                Err(err) => request.update(|r| r.fail(err.user_message(loans::errors::REGISTER_FAILED))),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = user;
    };

    view! {
        <section class="page form-page">
            <BackButton/>
            <h2>"Registro de Usuario"</h2>
            <form class="form" on:submit=on_submit>
                {TEXT_FIELDS
                    .iter()
                    .map(|&(label, input_type, field, read, write)| {
                        view! {
                            <FormField
                                label=label
                                input_type=input_type
                                value=Signal::derive(move || form.with(read))
                                on_input=Callback::new(move |v| form.update(|f| write(f, v)))
                                error=Signal::derive(move || {
                                    field.map_or("", |field| errors.with(|e| field_error(e, field)))
                                })
                            />
                        }
                    })
                    .collect_view()}

                <div class="field">
                    <label class="field__label">"Historial Crediticio"</label>
                    <select
                        class="field__input"
                        prop:value=move || form.with(|f| f.credit_history.as_wire())
                        on:change=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<CreditHistory>() {
                                form.update(|f| f.credit_history = value);
                            }
                        }
                    >
                        <option value="BUENO">"Bueno"</option>
                        <option value="REGULAR">"Regular"</option>
                        <option value="MALO">"Malo"</option>
                    </select>
                </div>

                <div class="field">
                    <label class="field__label">"Capacidad de Ahorro"</label>
                    <select
                        class="field__input"
                        prop:value=move || form.with(|f| f.savings_capacity.as_wire())
                        on:change=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<SavingsCapacity>() {
                                form.update(|f| f.savings_capacity = value);
                            }
                        }
                    >
                        <option value="ADECUADA">"Adecuada"</option>
                        <option value="INSUFICIENTE">"Insuficiente"</option>
                    </select>
                </div>

                <Notice state=request/>
                <button class="btn btn--primary" type="submit" disabled=move || request.get().is_busy()>
                    {move || if request.get().is_busy() { "Registrando..." } else { "Registrar" }}
                </button>
            </form>

            <Show when=move || registered.get().is_some()>
                <ChoiceModal
                    title="Registro exitoso"
                    message=Signal::derive(move || welcome_message(&registered.get().unwrap_or_default()))
                    primary_label="Solicitar Crédito"
                    primary_href=APPLY_PATH
                    secondary_label="Cerrar"
                    on_secondary=Callback::new(move |()| registered.set(None))
                />
            </Show>
        </section>
    }
}
