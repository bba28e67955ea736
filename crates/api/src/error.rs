use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pinroll_core::error::CoreError;
use serde_json::json;

/// Body message for every 500. Underlying details are logged, never returned.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Body message for unmatched routes and methods.
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Route not found";

/// Application-level error type for HTTP handlers.
///
/// This is the single catch boundary: handlers return [`AppResult`] and the
/// [`IntoResponse`] impl decides status and body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `pinroll_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// No route matches the method and path.
    #[error("Route not found")]
    RouteNotFound,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Core(CoreError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({ "success": false, "error": msg })),
            )
                .into_response(),

            AppError::RouteNotFound => (
                StatusCode::NOT_FOUND,
                axum::Json(json!({ "error": ROUTE_NOT_FOUND_MESSAGE })),
            )
                .into_response(),

            AppError::Core(CoreError::Malformed(_)) | AppError::Database(_) => {
                tracing::error!(error = %self, "API error");
                server_error()
            }
        }
    }
}

/// The uniform 500 response.
pub fn server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({ "success": false, "error": SERVER_ERROR_MESSAGE })),
    )
        .into_response()
}
