//! Handler for the name listing.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use pinroll_core::error::CoreError;
use pinroll_db::models::user::UserName;
use pinroll_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Role listed when the query string omits it or leaves it empty.
pub const DEFAULT_ROLE: &str = "user";

/// Pick the role from decoded query pairs.
///
/// The first `role` pair wins when the key repeats; an empty value falls
/// back to [`DEFAULT_ROLE`].
pub fn role_from_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .find(|(key, _)| key == "role")
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_ROLE)
        .to_string()
}

/// GET /api/names?role=<role>
///
/// Returns `[{id, full_name}]` for the role, sorted by name. The query is
/// decoded as raw pairs so a repeated key is not a rejection.
pub async fn list_names(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<Vec<UserName>>> {
    let Query(pairs) = query.map_err(|e| CoreError::Malformed(e.body_text()))?;
    let role = role_from_query(&pairs);
    let names = UserRepo::list_names_by_role(&state.pool, &role).await?;
    tracing::debug!(%role, count = names.len(), "Listed names");
    Ok(Json(names))
}
