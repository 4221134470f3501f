use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use pawmatch_core::error::CoreError;
use pawmatch_store::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for the write
/// side of the slot. Implements [`IntoResponse`] to produce consistent JSON
/// error responses; form failures additionally carry the full per-field
/// error list.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `pawmatch_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage write error from `pawmatch_store`.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, fields) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    msg.clone(),
                    None,
                ),
                CoreError::Form(errors) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "FORM_VALIDATION",
                    "Validation failed for one or more fields".to_string(),
                    Some(errors.clone()),
                ),
            },

            AppError::Store(err) => {
                tracing::error!(error = %err, "Storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "An internal storage error occurred".to_string(),
                    None,
                )
            }
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(fields) = fields {
            body["fields"] = json!(fields);
        }

        (status, axum::Json(body)).into_response()
    }
}
