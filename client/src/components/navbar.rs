//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::{APPLY_PATH, EVALUATE_PATH, FAQ_PATH, REGISTER_PATH, SIMULATE_PATH, STATUS_PATH};

const LINKS: &[(&str, &str)] = &[
    ("/", "Inicio"),
    (REGISTER_PATH, "Registro"),
    (APPLY_PATH, "Solicitar Crédito"),
    (SIMULATE_PATH, "Simulación"),
    (STATUS_PATH, "Estado Solicitudes"),
    (EVALUATE_PATH, "Evaluar Solicitudes"),
    (FAQ_PATH, "Preguntas Frecuentes"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"PrestaBanco"</A>
            <div class="navbar__links">
                {LINKS
                    .iter()
                    .map(|(href, label)| view! { <A href=*href attr:class="navbar__link">{*label}</A> })
                    .collect_view()}
            </div>
        </nav>
    }
}
