use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    /// Duplicate name/email or an integrity guard violation. Reported as
    /// 400, matching the API's historical behavior.
    Conflict(String),
    /// Field-level validation errors, returned as `{"message": [...]}`
    /// (user endpoints).
    Validation(Vec<String>),
    /// Field-level validation errors, returned as `{"errors": [...]}`
    /// (team endpoints).
    FieldErrors(Vec<String>),
    Internal(String),
    Database(sqlx::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AppError::Conflict(msg) => write!(f, "Conflict: {msg}"),
            AppError::Validation(errs) => write!(f, "Validation: {}", errs.join("; ")),
            AppError::FieldErrors(errs) => write!(f, "Validation: {}", errs.join("; ")),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
            AppError::Database(err) => write!(f, "Database Error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": msg }))).into_response()
            }
            AppError::Conflict(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "message": msg }))).into_response()
            }
            AppError::Validation(errs) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "message": errs }))).into_response()
            }
            AppError::FieldErrors(errs) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errs }))).into_response()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response()
            }
            AppError::Database(err) => {
                tracing::error!("Database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}
