//! Read projections over the external `users` table.
//!
//! The table also carries a `pin` column. No projection here selects it, so
//! it cannot leak into a response by accident.

use pinroll_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// One entry of the name listing.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct UserName {
    pub id: DbId,
    pub full_name: String,
}

/// Public user info returned after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct UserSummary {
    pub id: DbId,
    pub full_name: String,
    pub role: String,
}
