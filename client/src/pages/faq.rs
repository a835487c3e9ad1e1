//! Frequently asked questions.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

use leptos::prelude::*;

use crate::components::back_button::BackButton;

pub(crate) const QUESTIONS: &[(&str, &str)] = &[
    (
        "¿Cómo puedo registrar un nuevo usuario?",
        "Ve a la sección \"Registro\" en la barra de navegación y completa el formulario con tus datos personales.",
    ),
    (
        "¿Cómo puedo solicitar un crédito?",
        "Navega a \"Solicitar Crédito\", completa el formulario con la información requerida y envía tu solicitud.",
    ),
    (
        "¿Qué documentos necesito para solicitar un crédito?",
        "Necesitarás subir un comprobante de ingresos y un comprobante de avalúo en formato jpg, png o pdf, \
         con un tamaño máximo de 5MB cada uno. Cada tipo de préstamo muestra además sus requisitos propios.",
    ),
    (
        "¿Cuál es la tasa de interés para mi préstamo?",
        "La tasa varía según el tipo de préstamo. Usa la opción \"Simulación\" para obtener una aproximación.",
    ),
    (
        "¿Cómo puedo ver el estado de mi solicitud?",
        "Ve a \"Estado Solicitudes\", ingresa tu nombre completo tal como está registrado y presiona \"Ver Solicitudes\".",
    ),
    (
        "¿Cómo puedo eliminar mi solicitud?",
        "En \"Estado Solicitudes\" cada solicitud tiene la opción de eliminarla; deberás confirmar tu nombre \
         completo y número de identificación.",
    ),
];

#[component]
pub fn FaqPage() -> impl IntoView {
    view! {
        <section class="page faq">
            <BackButton/>
            <h2>"Preguntas Frecuentes"</h2>
            {QUESTIONS
                .iter()
                .map(|(question, answer)| {
                    view! {
                        <details class="faq__item">
                            <summary>{*question}</summary>
                            <p>{*answer}</p>
                        </details>
                    }
                })
                .collect_view()}
        </section>
    }
}
