use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use korip_core::error::CoreError;
use serde_json::json;

/// `axum::Json` with rejections routed through [`AppError`], so malformed
/// request bodies produce the same `{error_code, error_message}` shape as
/// every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] so every failure in the service produces the
/// same `{error_code, error_message}` JSON body — the single boundary
/// translator between typed domain errors and the wire.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `korip_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A malformed request body (invalid JSON, wrong field shapes).
    #[error("Invalid request body: {0}")]
    JsonRejection(#[from] JsonRejection),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => (status_for(core), core.error_code(), core.to_string()),

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::JsonRejection(rejection) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                rejection.body_text(),
            ),

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error_code": code,
            "error_message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Transport status class for each domain error.
///
/// 400 for validation/business-rule failures, 401 for authentication
/// failures, 404/409/500 for the transport classes.
fn status_for(err: &CoreError) -> StatusCode {
    match err {
        CoreError::NotFound { .. } | CoreError::NotFoundMessage(_) => StatusCode::NOT_FOUND,
        CoreError::Conflict(_) => StatusCode::CONFLICT,
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            StatusCode::INTERNAL_SERVER_ERROR
        }

        CoreError::InvalidUserInfo
        | CoreError::InvalidRefreshToken
        | CoreError::MismatchedPassword
        | CoreError::AccountInactive
        | CoreError::LogoutFail
        | CoreError::Unauthorized(_) => StatusCode::UNAUTHORIZED,

        CoreError::UnsupportedLanguage { .. }
        | CoreError::Validation(_)
        | CoreError::EmailAlreadyRegistered
        | CoreError::EmailNotCertified
        | CoreError::EmailSendFailed
        | CoreError::EmailCertificationFail
        | CoreError::SameCurrentPassword
        | CoreError::InvalidPassword(_)
        | CoreError::UserNotFound
        | CoreError::MissingCredentials => StatusCode::BAD_REQUEST,
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
