//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    faq::FaqPage, home::HomePage, loan_application::LoanApplicationPage, loan_evaluation::LoanEvaluationPage,
    loan_status::LoanStatusPage, registration::RegistrationPage, simulation::SimulationPage,
};

pub const REGISTER_PATH: &str = "/registro";
pub const APPLY_PATH: &str = "/solicitud";
pub const SIMULATE_PATH: &str = "/simulacion";
pub const STATUS_PATH: &str = "/estado-solicitudes";
pub const EVALUATE_PATH: &str = "/evaluacion";
pub const FAQ_PATH: &str = "/faq";

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="prestabanco" href="/style/main.css"/>
        <Title text="PrestaBanco"/>

        <Router>
            <div class="app">
                <Navbar/>
                <main class="app__content">
                    <Routes fallback=|| view! { <p class="app__not-found">"Página no encontrada."</p> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("registro") view=RegistrationPage/>
                        <Route path=StaticSegment("solicitud") view=LoanApplicationPage/>
                        <Route path=StaticSegment("simulacion") view=SimulationPage/>
                        <Route path=StaticSegment("estado-solicitudes") view=LoanStatusPage/>
                        <Route path=StaticSegment("evaluacion") view=LoanEvaluationPage/>
                        <Route path=StaticSegment("faq") view=FaqPage/>
                    </Routes>
                </main>
                <footer class="app__footer">
                    <p>"© 2025 PrestaBanco - Todos los derechos reservados"</p>
                </footer>
            </div>
        </Router>
    }
}
