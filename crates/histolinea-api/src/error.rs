//! Error types for the HTTP API layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. The
//! three-way taxonomy the client distinguishes: a missing record (404),
//! a rejected payload (422), and everything transport-shaped (5xx, shown
//! as a transient failure the user may re-trigger).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use histolinea_core::ValidationError;
use histolinea_db::DbError;

/// Errors that can occur in the HTTP API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested record was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The submitted draft failed validation.
    #[error("invalid payload: {0}")]
    Validation(#[from] ValidationError),

    /// An invalid query parameter was provided.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// A UUID could not be parsed from the request path.
    #[error("invalid UUID: {0}")]
    InvalidUuid(String),

    /// The data layer failed.
    #[error("database error: {0}")]
    Database(DbError),
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        // A missing id is the caller's 404, not a server fault.
        match err {
            DbError::NotFound(id) => Self::NotFound(format!("event {id}")),
            other => Self::Database(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::Validation(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            Self::InvalidQuery(msg) | Self::InvalidUuid(msg) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            Self::Database(e) => {
                tracing::error!(error = %e, "Database failure surfaced to client");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
