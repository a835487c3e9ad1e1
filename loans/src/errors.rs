//! Request failures and the strings screens show for them.

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

use serde_json::Value;

pub const REGISTER_FAILED: &str = "Error al registrar usuario.";
pub const CREATE_LOAN_FAILED: &str = "Error al crear la solicitud de crédito";
pub const SIMULATE_FAILED: &str = "Error al simular el crédito";
pub const LIST_LOANS_FAILED: &str = "Error al obtener las solicitudes";
pub const DELETE_LOAN_FAILED: &str = "Error al eliminar la solicitud";
pub const EVALUATE_FAILED: &str = "Error al evaluar la solicitud.";
pub const EVALUATION_LIST_FAILED: &str = "Error al obtener la lista de solicitudes.";
pub const STATUS_CHANGE_FAILED: &str = "Error al cambiar el estado de la solicitud.";
pub const USERS_FAILED: &str = "Error al obtener los usuarios.";

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RequestError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("backend returned {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status {
        status: u16,
        /// Server-supplied `message`, when the body carried one.
        message: Option<String>,
        /// Field-level messages from a validation map body, in key order.
        details: Vec<String>,
    },
    /// A success response whose body did not match the expected record.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl RequestError {
    /// Build a status error from a raw response body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let Ok(parsed) = serde_json::from_str::<Value>(body) else {
            return Self::Status { status, message: None, details: Vec::new() };
        };
        let message = server_message(&parsed);
        let details = if message.is_none() { field_messages(&parsed) } else { Vec::new() };
        Self::Status { status, message, details }
    }

    /// Server-supplied message, or `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }

    /// Like [`Self::user_message`], but lists validation-map messages under
    /// the fallback when the server sent no single message.
    #[must_use]
    pub fn detailed_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: None, details, .. } if !details.is_empty() => {
                format!("{fallback}:\n{}", details.join("\n"))
            }
            _ => self.user_message(fallback),
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Non-empty `message` string of a JSON error body.
#[must_use]
pub fn server_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
}

/// Messages of a `{ field: message }` validation body.
///
/// Only objects whose values are all strings qualify; generic error envelopes
/// carry numbers (`status`) and yield nothing.
#[must_use]
pub fn field_messages(body: &Value) -> Vec<String> {
    let Some(map) = body.as_object() else {
        return Vec::new();
    };
    let mut messages = Vec::with_capacity(map.len());
    for value in map.values() {
        match value.as_str() {
            Some(text) => messages.push(text.to_owned()),
            None => return Vec::new(),
        }
    }
    messages
}
