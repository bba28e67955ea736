use crate::error::AppError;

/// Fallback for unknown paths and for known paths hit with an unsupported
/// method. Both answer 404 rather than 405.
pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}
