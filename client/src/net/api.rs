//! REST API helpers for the PrestaBanco backend.
//!
//! Browser builds (`csr`) issue real HTTP calls via `gloo-net`. Other builds
//! compile the same signatures but every call fails with a transport error,
//! which keeps pages type-checking under native `cargo test`.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, RequestError>`. Non-success responses carry
//! the server body so pages can show the backend `message` or fall back to a
//! screen-specific string via `RequestError::user_message`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use loans::api::Endpoint;
use loans::errors::RequestError;
use loans::types::{LoanApplication, SimulationRequest, SimulationResult, User};
use serde::de::DeserializeOwned;

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
enum Body {
    Empty,
    Json(serde_json::Value),
    #[cfg(feature = "csr")]
    Form(web_sys::FormData),
}

/// Join the backend root with encoded path segments and query.
pub(crate) fn endpoint_url(base: &str, endpoint: &Endpoint<'_>, encode: impl Fn(&str) -> String) -> String {
    let mut url = base.trim_end_matches('/').to_owned();
    for segment in endpoint.segments() {
        url.push('/');
        url.push_str(&encode(&segment));
    }
    let query = endpoint.query();
    for (index, (key, value)) in query.iter().enumerate() {
        url.push(if index == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.push_str(&encode(value));
    }
    url
}

pub(crate) fn decode<T: DeserializeOwned>(text: &str) -> Result<T, RequestError> {
    serde_json::from_str(text).map_err(|e| RequestError::Decode(e.to_string()))
}

/// Decode a list body; empty or `null` is an empty list.
pub(crate) fn decode_list<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, RequestError> {
    loans::api::parse_list(text).map_err(|e| RequestError::Decode(e.to_string()))
}

/// Decode a body that may be empty or `null`.
pub(crate) fn decode_optional<T: DeserializeOwned>(text: &str) -> Result<Option<T>, RequestError> {
    loans::api::parse_optional(text).map_err(|e| RequestError::Decode(e.to_string()))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Body, RequestError> {
    serde_json::to_value(value).map(Body::Json).map_err(|e| RequestError::Transport(e.to_string()))
}

#[cfg(feature = "csr")]
fn transport(err: impl std::fmt::Display) -> RequestError {
    RequestError::Transport(err.to_string())
}

#[cfg(feature = "csr")]
fn js_error(err: &wasm_bindgen::JsValue) -> RequestError {
    RequestError::Transport(format!("{err:?}"))
}

#[cfg(feature = "csr")]
async fn send(endpoint: Endpoint<'_>, body: Body) -> Result<String, RequestError> {
    use gloo_net::http::Request;
    use loans::api::Method;

    let url = endpoint_url(&crate::config::api_base(), &endpoint, |raw| String::from(js_sys::encode_uri_component(raw)));
    let builder = match endpoint.method() {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    };
    let request = match body {
        Body::Empty => builder.build(),
        Body::Json(value) => builder.json(&value),
        Body::Form(form) => builder.body(form),
    }
    .map_err(transport)?;

    log::debug!("{}", endpoint.describe());
    let response = request.send().await.map_err(transport)?;
    let status = response.status();
    let ok = response.ok();
    let text = response.text().await.map_err(transport)?;
    if !ok {
        log::warn!("{} failed with {status}", endpoint.describe());
        return Err(RequestError::from_response(status, &text));
    }
    Ok(text)
}

#[cfg(not(feature = "csr"))]
async fn send(endpoint: Endpoint<'_>, _body: Body) -> Result<String, RequestError> {
    Err(RequestError::Transport(format!("{} is only available in the browser", endpoint.describe())))
}

/// Register a new applicant via `POST /usuarios/registrar`.
///
/// # Errors
///
/// Returns a [`RequestError`] when the request fails or the backend rejects it.
pub async fn register_user(user: &User) -> Result<User, RequestError> {
    let text = send(Endpoint::RegisterUser, to_json(user)?).await?;
    decode(&text)
}

/// Submit a loan application with its two documents as `multipart/form-data`.
///
/// # Errors
///
/// Returns a [`RequestError`] when the form cannot be built, the request fails
/// or the backend rejects it.
#[cfg(feature = "csr")]
pub async fn create_loan(
    draft: &loans::validation::LoanApplicationDraft,
    income_proof: &web_sys::File,
    appraisal_proof: &web_sys::File,
) -> Result<LoanApplication, RequestError> {
    use loans::api::{APPRAISAL_PROOF_PART, INCOME_PROOF_PART};

    let form = web_sys::FormData::new().map_err(|e| js_error(&e))?;
    for (name, value) in draft.text_parts() {
        form.append_with_str(name, &value).map_err(|e| js_error(&e))?;
    }
    form.append_with_blob_and_filename(INCOME_PROOF_PART, income_proof, &income_proof.name())
        .map_err(|e| js_error(&e))?;
    form.append_with_blob_and_filename(APPRAISAL_PROOF_PART, appraisal_proof, &appraisal_proof.name())
        .map_err(|e| js_error(&e))?;

    let text = send(Endpoint::CreateLoan, Body::Form(form)).await?;
    decode(&text)
}

/// Run a backend-side simulation.
///
/// # Errors
///
/// Returns a [`RequestError`]; validation-map bodies are kept in `details`.
pub async fn simulate(request: &SimulationRequest) -> Result<SimulationResult, RequestError> {
    let text = send(Endpoint::Simulate, to_json(request)?).await?;
    decode(&text)
}

/// Fetch every application.
///
/// # Errors
///
/// Returns a [`RequestError`] when the request fails.
pub async fn list_loans() -> Result<Vec<LoanApplication>, RequestError> {
    let text = send(Endpoint::Loans, Body::Empty).await?;
    decode_list(&text)
}

/// Fetch applications whose owner name matches exactly.
///
/// # Errors
///
/// Returns a [`RequestError`] when the request fails.
pub async fn loans_by_owner(full_name: &str) -> Result<Vec<LoanApplication>, RequestError> {
    let text = send(Endpoint::LoansByOwner(full_name), Body::Empty).await?;
    decode_list(&text)
}

/// Fetch one application; `None` when the backend answers with an empty body.
///
/// # Errors
///
/// Returns a [`RequestError`] when the request fails.
pub async fn fetch_loan(id: i64) -> Result<Option<LoanApplication>, RequestError> {
    let text = send(Endpoint::Loan(id), Body::Empty).await?;
    decode_optional(&text)
}

/// Delete an application.
///
/// # Errors
///
/// Returns a [`RequestError`] when the request fails.
pub async fn delete_loan(id: i64) -> Result<(), RequestError> {
    send(Endpoint::DeleteLoan(id), Body::Empty).await.map(|_| ())
}

/// Ask the backend to evaluate an application; returns its verdict verbatim.
///
/// # Errors
///
/// Returns a [`RequestError`] when the request fails.
pub async fn evaluate_loan(id: i64) -> Result<String, RequestError> {
    send(Endpoint::Evaluate(id), Body::Empty).await
}

/// Force an application into `new_status`; the response body is returned as-is.
///
/// # Errors
///
/// Returns a [`RequestError`] when the request fails.
pub async fn change_status(id: i64, new_status: &str) -> Result<String, RequestError> {
    send(Endpoint::ChangeStatus(id, new_status), Body::Empty).await
}
