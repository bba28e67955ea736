//! Handler for PIN login.
//!
//! A credential mismatch is not an HTTP error: it answers 200 with
//! `success: false`. Only missing fields (400) and store failures (500) use
//! error statuses.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use pinroll_core::error::CoreError;
use pinroll_core::login::LoginRequest;
use pinroll_db::models::user::UserSummary;
use pinroll_db::repositories::UserRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Body message when no user matches the submitted credentials.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response body for `POST /api/login`.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl LoginResponse {
    fn accepted(user: UserSummary) -> Self {
        Self {
            success: true,
            user: Some(user),
            error: None,
        }
    }

    fn rejected() -> Self {
        Self {
            success: false,
            user: None,
            error: Some(INVALID_CREDENTIALS_MESSAGE),
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/login
///
/// The body is read raw so a missing or mistyped `Content-Type` does not
/// change the outcome; decoding and presence checks happen before the store
/// is queried. A body the extractor refuses (over the size limit, broken
/// stream) is malformed input.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Json<LoginResponse>> {
    let body = body.map_err(|e| CoreError::Malformed(e.body_text()))?;
    let credentials = LoginRequest::from_body(&body)?.validate()?;

    let response = match UserRepo::find_by_credentials(&state.pool, &credentials).await? {
        Some(user) => {
            tracing::debug!(user_id = user.id, role = %user.role, "Login accepted");
            LoginResponse::accepted(user)
        }
        None => {
            tracing::debug!(full_name = %credentials.full_name, role = %credentials.role, "Login rejected");
            LoginResponse::rejected()
        }
    };

    Ok(Json(response))
}
