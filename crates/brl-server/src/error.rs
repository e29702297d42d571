use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use brl_ledger::LedgerError;

/// Errors raised while standing the server up.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// A ledger rejection carried to the HTTP surface.
///
/// Every ledger error is a client-input error, so the body is always
/// `{"error": <message>}` with the message taken verbatim from the ledger.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ApiError(#[from] pub LedgerError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            LedgerError::AuthorNotFound => StatusCode::NOT_FOUND,
            LedgerError::MissingFields
            | LedgerError::BelowMinimum { .. }
            | LedgerError::InsufficientBalance { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
