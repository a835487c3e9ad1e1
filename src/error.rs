use std::path::PathBuf;

use loans::confirm::ConfirmationError;
use loans::errors::RequestError;
use loans::staff::StaffDenied;
use loans::validation::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not write output: {0}")]
    Output(#[from] std::io::Error),
    #[error("invalid input: {0}")]
    Validation(FieldErrors),
    #[error("{0}")]
    ConfirmationMismatch(#[from] ConfirmationError),
    #[error("{0}")]
    StaffDenied(#[from] StaffDenied),
    #[error("El nuevo estado es requerido")]
    StatusRequired,
    #[error("Solicitud #{0} no encontrada")]
    LoanNotFound(i64),
    #[error("Usuario {0} no encontrado")]
    UserNotFound(String),
    /// Non-success response before a screen fallback was applied.
    #[error(transparent)]
    Backend(RequestError),
    #[error("{message} (HTTP {status})")]
    Server { status: u16, message: String },
    /// Transport failure reported under the screen's message.
    #[error("{message} ({source})")]
    Unreachable {
        message: String,
        #[source]
        source: reqwest::Error,
    },
}

impl CliError {
    /// Replace a raw backend failure with the screen's message: the server's
    /// `message`, else `fallback`. Transport failures get `fallback` too.
    #[must_use]
    pub fn with_fallback(self, fallback: &str) -> Self {
        match self {
            Self::Backend(err) => Self::server(&err, err.user_message(fallback)),
            Self::Http(source) => Self::Unreachable { message: fallback.to_owned(), source },
            other => other,
        }
    }

    /// Like [`Self::with_fallback`], but lists validation-map messages.
    #[must_use]
    pub fn with_detailed_fallback(self, fallback: &str) -> Self {
        match self {
            Self::Backend(err) => Self::server(&err, err.detailed_message(fallback)),
            Self::Http(source) => Self::Unreachable { message: fallback.to_owned(), source },
            other => other,
        }
    }

    fn server(err: &RequestError, message: String) -> Self {
        Self::Server { status: err.status().unwrap_or_default(), message }
    }

    /// Process exit code: 2 for input the client refused, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_)
            | Self::StatusRequired
            | Self::ConfirmationMismatch(_)
            | Self::StaffDenied(_)
            | Self::InvalidBaseUrl(_) => 2,
            _ => 1,
        }
    }
}
