use contracts::system::auth::ApiErrorBody;
use thiserror::Error;

/// Every failure of a backend call: network, non-2xx, injected fault, (de)serialization
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HttpError {
    #[error("network error: {0}")]
    Network(String),

    #[error(
        "request failed with status {status}{}",
        .body.as_ref().and_then(|b| b.message.as_deref()).map(|m| format!(": {}", m)).unwrap_or_default()
    )]
    Status {
        status: u16,
        body: Option<ApiErrorBody>,
    },

    #[error("Erro simulado via interceptador de erros (Target: {target})")]
    Simulated { target: String },

    #[error("failed to serialize request: {0}")]
    Serialize(String),

    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl HttpError {
    /// HTTP status, when the backend answered
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn body(&self) -> Option<&ApiErrorBody> {
        match self {
            HttpError::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// 401 carrying the `UNAUTHORIZED` code
    pub fn is_session_expired(&self) -> bool {
        self.status() == Some(401) && self.body().map(|b| b.is_unauthorized()).unwrap_or(false)
    }
}
