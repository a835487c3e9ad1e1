//! In-process stand-in for the PrestaBanco backend. Records every request
//! and answers from a fixed `"METHOD /raw/path"` table; anything else is 404.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use loans::staff::StaffGate;

use crate::config::{Config, OutputFormat, parse_base_url};

#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: String,
    /// Path exactly as sent, still percent-encoded.
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Clone)]
struct MockState {
    replies: Arc<HashMap<String, (u16, String)>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

pub struct MockBackend {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockBackend {
    pub async fn start(replies: &[(&str, u16, &str)]) -> Self {
        let replies: HashMap<String, (u16, String)> =
            replies.iter().map(|(route, status, body)| ((*route).to_owned(), (*status, (*body).to_owned()))).collect();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState { replies: Arc::new(replies), requests: Arc::clone(&requests) };
        let app = Router::new().fallback(handle).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url: format!("http://{addr}/api"), requests }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn config(&self) -> Config {
        Config {
            base_url: parse_base_url(&self.base_url).unwrap(),
            timeout: Duration::from_secs(5),
            staff: StaffGate::default(),
            output: OutputFormat::Table,
        }
    }
}

async fn handle(State(state): State<MockState>, method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    let path = uri.path().to_owned();
    let content_type = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()).map(ToOwned::to_owned);
    state.requests.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path: path.clone(),
        query: uri.query().map(ToOwned::to_owned),
        content_type,
        body: body.to_vec(),
    });

    match state.replies.get(&format!("{method} {path}")) {
        Some((status, reply)) => {
            let status = StatusCode::from_u16(*status).unwrap();
            (status, [(header::CONTENT_TYPE, "application/json")], reply.clone()).into_response()
        }
        None => (StatusCode::NOT_FOUND, r#"{"message":"ruta no simulada"}"#).into_response(),
    }
}
