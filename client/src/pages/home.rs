//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::{APPLY_PATH, REGISTER_PATH, SIMULATE_PATH, STATUS_PATH};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="page home">
            <h1>"Bienvenido a PrestaBanco"</h1>
            <p>
                "Simplificamos la gestión de tus solicitudes de crédito hipotecario. "
                "Regístrate, aplica a un préstamo, sigue el estado de tus solicitudes y simula montos, "
                "todo en un solo lugar."
            </p>
            <div class="home__actions">
                <A href=REGISTER_PATH attr:class="btn btn--primary">"Registrarse"</A>
                <A href=SIMULATE_PATH attr:class="btn btn--outline">"Simular un crédito"</A>
                <A href=APPLY_PATH attr:class="btn btn--outline">"Solicitar un crédito"</A>
                <A href=STATUS_PATH attr:class="btn btn--outline">"Ver mis solicitudes"</A>
            </div>
        </section>
    }
}
