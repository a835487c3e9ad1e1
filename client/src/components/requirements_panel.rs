//! Loan-type requirement hints beside the application and simulation forms.
//!
//! Hints are informational; out-of-range values produce advisories but never
//! block submission.

#[cfg(test)]
#[path = "requirements_panel_test.rs"]
mod requirements_panel_test;

use leptos::prelude::*;
use loans::requirements::requirements_for;
use loans::types::LoanType;

/// Advisory lines for raw form input; unparsable values are skipped.
pub fn advisory_lines(loan_type: LoanType, term: &str, rate: &str) -> Vec<String> {
    let term_years = term.trim().parse::<u32>().ok();
    let rate_percent = rate.trim().parse::<f64>().ok().filter(|r| r.is_finite());
    requirements_for(loan_type).advisories(term_years, rate_percent)
}

#[component]
pub fn RequirementsPanel(
    #[prop(into)] loan_type: Signal<Option<LoanType>>,
    #[prop(into)] term: Signal<String>,
    #[prop(into)] rate: Signal<String>,
) -> impl IntoView {
    move || {
        loan_type.get().map(|loan_type| {
            let requirements = requirements_for(loan_type);
            let notes = advisory_lines(loan_type, &term.get(), &rate.get());
            view! {
                <aside class="requirements">
                    <h3>{format!("Requisitos para {}", loan_type.display_name())}</h3>
                    <dl class="requirements__ranges">
                        <dt>"Plazo máximo"</dt>
                        <dd>{requirements.term_hint()}</dd>
                        <dt>"Tasa de interés anual"</dt>
                        <dd>{requirements.rate_hint()}</dd>
                        <dt>"Financiamiento máximo"</dt>
                        <dd>{requirements.financing_hint()}</dd>
                    </dl>
                    <ul class="requirements__documents">
                        {requirements.documents.iter().map(|doc| view! { <li>{*doc}</li> }).collect_view()}
                    </ul>
                    <ul class="requirements__advisories">
                        {notes.into_iter().map(|note| view! { <li>{note}</li> }).collect_view()}
                    </ul>
                </aside>
            }
        })
    }
}
