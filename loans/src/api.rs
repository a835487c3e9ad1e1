//! REST endpoint catalogue.
//!
//! Each variant names one backend operation. Path segments are returned raw;
//! the transport percent-encodes them when it builds the final URL, so names
//! with spaces or accents travel intact.
//!
//! `parse_list` and `parse_optional` are the body decoders both transports
//! share, so an empty or `null` answer means the same thing everywhere.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

/// Backend root used by the command line client when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Backend root used by the web client; the dev server proxies it.
pub const DEFAULT_WEB_BASE: &str = "/api";

/// Multipart part carrying the proof-of-income document.
pub const INCOME_PROOF_PART: &str = "comprobanteIngresos";

/// Multipart part carrying the property appraisal document.
pub const APPRAISAL_PROOF_PART: &str = "comprobanteAvaluo";

/// Query parameter naming the target status of a status change.
pub const NEW_STATUS_PARAM: &str = "nuevoEstado";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// One backend operation, with its path parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint<'a> {
    RegisterUser,
    Users,
    User(i64),
    UserByName(&'a str),
    /// Multipart: owner name, loan fields and both documents.
    CreateLoan,
    Loans,
    Loan(i64),
    LoansByOwner(&'a str),
    /// Responds with a plain-text verdict, not JSON.
    Evaluate(i64),
    ChangeStatus(i64, &'a str),
    DeleteLoan(i64),
    Simulate,
}

impl Endpoint<'_> {
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::RegisterUser | Self::CreateLoan | Self::Simulate => Method::Post,
            Self::Users | Self::User(_) | Self::UserByName(_) | Self::Loans | Self::Loan(_) | Self::LoansByOwner(_) => {
                Method::Get
            }
            Self::Evaluate(_) | Self::ChangeStatus(..) => Method::Put,
            Self::DeleteLoan(_) => Method::Delete,
        }
    }

    /// Unencoded path segments below the backend root.
    #[must_use]
    pub fn segments(&self) -> Vec<String> {
        match self {
            Self::RegisterUser => vec!["usuarios".into(), "registrar".into()],
            Self::Users => vec!["usuarios".into()],
            Self::User(id) => vec!["usuarios".into(), id.to_string()],
            Self::UserByName(name) => vec!["usuarios".into(), "nombre".into(), (*name).to_owned()],
            Self::CreateLoan => vec!["solicitudes".into(), "crear-con-usuario".into()],
            Self::Loans => vec!["solicitudes".into()],
            Self::Loan(id) | Self::DeleteLoan(id) => vec!["solicitudes".into(), id.to_string()],
            Self::LoansByOwner(name) => {
                vec!["solicitudes".into(), "usuario".into(), "nombre".into(), (*name).to_owned()]
            }
            Self::Evaluate(id) => vec!["solicitudes".into(), id.to_string(), "evaluar".into()],
            Self::ChangeStatus(id, _) => vec!["solicitudes".into(), id.to_string(), "cambiar-estado".into()],
            Self::Simulate => vec!["solicitudes".into(), "simular".into()],
        }
    }

    /// Query parameters, unencoded.
    #[must_use]
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::ChangeStatus(_, status) => vec![(NEW_STATUS_PARAM, (*status).to_owned())],
            _ => Vec::new(),
        }
    }

    /// Path for log lines, e.g. `PUT /solicitudes/7/evaluar`.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{} /{}", self.method().as_str(), self.segments().join("/"))
    }
}

/// Decode a list response. An empty body or `null` is an empty list.
///
/// # Errors
///
/// Returns the JSON error when the body is neither blank, `null`, nor a list
/// of `T`.
pub fn parse_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str::<Option<Vec<T>>>(body)?.unwrap_or_default())
}

/// Decode a single-record response. An empty body or `null` is `None`.
///
/// # Errors
///
/// Returns the JSON error when the body is neither blank, `null`, nor a `T`.
pub fn parse_optional<T: DeserializeOwned>(body: &str) -> Result<Option<T>, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(body)
}
