use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::handlers::fallback::route_not_found;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// GET  /api/names?role=<role>   names for a role (default "user")
/// POST /api/login               PIN login
/// GET  /api/health              liveness, no store access
/// ```
///
/// Paths are matched exactly; `/api/names/` is not `/api/names`. `get`
/// would also answer `HEAD`, so `HEAD` is routed to the 404 explicitly.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/names",
            get(handlers::names::list_names).head(route_not_found),
        )
        .route("/api/login", post(handlers::auth::login))
        .route(
            "/api/health",
            get(handlers::health::health_check).head(route_not_found),
        )
}
