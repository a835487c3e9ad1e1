//! HTTP client for the PrestaBanco backend.
//!
//! One method per endpoint. Failures are mapped to the message the matching
//! web screen shows: the server's `message` when present, otherwise that
//! screen's fallback text.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use loans::api::{self, APPRAISAL_PROOF_PART, Endpoint, INCOME_PROOF_PART, Method};
use loans::errors::{self, RequestError};
use loans::types::{LoanApplication, SimulationRequest, SimulationResult, User};
use loans::validation::{FileMeta, LoanApplicationDraft};
use reqwest::Url;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::CliError;

/// A document read from disk, ready to attach.
#[derive(Clone, Debug)]
pub struct Upload {
    pub meta: FileMeta,
    pub bytes: Vec<u8>,
}

enum Body {
    Empty,
    Json(serde_json::Value),
    Form(Form),
}

#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    base: Url,
}

impl BackendClient {
    /// # Errors
    ///
    /// Fails when the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, CliError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, base: config.base_url.clone() })
    }

    /// Endpoint URL with each path segment percent-encoded.
    ///
    /// # Errors
    ///
    /// [`CliError::InvalidBaseUrl`] when the base cannot take path segments.
    pub fn url(&self, endpoint: &Endpoint<'_>) -> Result<Url, CliError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| CliError::InvalidBaseUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(endpoint.segments());
        let query = endpoint.query();
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn send(&self, endpoint: Endpoint<'_>, body: Body) -> Result<String, CliError> {
        let url = self.url(&endpoint)?;
        let method = match endpoint.method() {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };
        tracing::debug!(method = endpoint.method().as_str(), path = url.path(), "sending request");

        let request = self.http.request(method, url.clone());
        let request = match body {
            Body::Empty => request,
            Body::Json(value) => request.json(&value),
            Body::Form(form) => request.multipart(form),
        };
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                method = endpoint.method().as_str(),
                path = url.path(),
                status = status.as_u16(),
                "backend rejected request"
            );
            return Err(CliError::Backend(RequestError::from_response(status.as_u16(), &text)));
        }
        tracing::info!(method = endpoint.method().as_str(), path = url.path(), status = status.as_u16(), "request done");
        Ok(text)
    }

    pub async fn register_user(&self, user: &User) -> Result<User, CliError> {
        let body = Body::Json(serde_json::to_value(user)?);
        let text = self.send(Endpoint::RegisterUser, body).await.map_err(|e| e.with_fallback(errors::REGISTER_FAILED))?;
        decode(&text)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, CliError> {
        let text = self.send(Endpoint::Users, Body::Empty).await.map_err(|e| e.with_fallback(errors::USERS_FAILED))?;
        decode_list(&text)
    }

    pub async fn fetch_user(&self, id: i64) -> Result<Option<User>, CliError> {
        let text = self.send(Endpoint::User(id), Body::Empty).await.map_err(|e| e.with_fallback(errors::USERS_FAILED))?;
        decode_optional(&text)
    }

    pub async fn find_user(&self, name: &str) -> Result<Option<User>, CliError> {
        let text =
            self.send(Endpoint::UserByName(name), Body::Empty).await.map_err(|e| e.with_fallback(errors::USERS_FAILED))?;
        decode_optional(&text)
    }

    /// Submit an application with both documents as multipart parts.
    pub async fn create_loan(
        &self,
        draft: &LoanApplicationDraft,
        income: Upload,
        appraisal: Upload,
    ) -> Result<LoanApplication, CliError> {
        let form = loan_form(draft, income, appraisal)?;
        let text = self
            .send(Endpoint::CreateLoan, Body::Form(form))
            .await
            .map_err(|e| e.with_fallback(errors::CREATE_LOAN_FAILED))?;
        decode(&text)
    }

    pub async fn list_loans(&self) -> Result<Vec<LoanApplication>, CliError> {
        let text = self.send(Endpoint::Loans, Body::Empty).await.map_err(|e| e.with_fallback(errors::LIST_LOANS_FAILED))?;
        decode_list(&text)
    }

    pub async fn loans_by_owner(&self, name: &str) -> Result<Vec<LoanApplication>, CliError> {
        let text = self
            .send(Endpoint::LoansByOwner(name), Body::Empty)
            .await
            .map_err(|e| e.with_fallback(errors::LIST_LOANS_FAILED))?;
        decode_list(&text)
    }

    pub async fn fetch_loan(&self, id: i64) -> Result<Option<LoanApplication>, CliError> {
        let text = self.send(Endpoint::Loan(id), Body::Empty).await.map_err(|e| e.with_fallback(errors::LIST_LOANS_FAILED))?;
        decode_optional(&text)
    }

    pub async fn delete_loan(&self, id: i64) -> Result<(), CliError> {
        self.send(Endpoint::DeleteLoan(id), Body::Empty).await.map_err(|e| e.with_fallback(errors::DELETE_LOAN_FAILED))?;
        Ok(())
    }

    /// Run the backend evaluation; returns its outcome text verbatim.
    pub async fn evaluate_loan(&self, id: i64) -> Result<String, CliError> {
        self.send(Endpoint::Evaluate(id), Body::Empty).await.map_err(|e| e.with_fallback(errors::EVALUATE_FAILED))
    }

    /// Force a status code; returns the raw response body.
    pub async fn change_status(&self, id: i64, new_status: &str) -> Result<String, CliError> {
        self.send(Endpoint::ChangeStatus(id, new_status), Body::Empty)
            .await
            .map_err(|e| e.with_fallback(errors::STATUS_CHANGE_FAILED))
    }

    pub async fn simulate(&self, request: &SimulationRequest) -> Result<SimulationResult, CliError> {
        let body = Body::Json(serde_json::to_value(request)?);
        let text = self
            .send(Endpoint::Simulate, body)
            .await
            .map_err(|e| e.with_detailed_fallback(errors::SIMULATE_FAILED))?;
        decode(&text)
    }
}

fn loan_form(draft: &LoanApplicationDraft, income: Upload, appraisal: Upload) -> Result<Form, CliError> {
    let mut form = Form::new();
    for (name, value) in draft.text_parts() {
        form = form.text(name, value);
    }
    for (name, upload) in [(INCOME_PROOF_PART, income), (APPRAISAL_PROOF_PART, appraisal)] {
        let part = Part::bytes(upload.bytes).file_name(upload.meta.name).mime_str(&upload.meta.mime)?;
        form = form.part(name, part);
    }
    Ok(form)
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, CliError> {
    Ok(serde_json::from_str(text)?)
}

fn decode_list<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, CliError> {
    Ok(api::parse_list(text)?)
}

/// Single-record lookups answer `null` or nothing when the record is missing.
fn decode_optional<T: DeserializeOwned>(text: &str) -> Result<Option<T>, CliError> {
    Ok(api::parse_optional(text)?)
}
