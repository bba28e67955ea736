//! Repository for the `users` table.

use pinroll_core::login::Credentials;
use sqlx::PgPool;

use crate::models::user::{UserName, UserSummary};

/// Read-only queries against `users`. The table's schema is owned outside
/// this service; `id` is cast so any integer key column decodes as `DbId`.
pub struct UserRepo;

impl UserRepo {
    /// List `{id, full_name}` for every user with the given role, ordered by
    /// name under the store's collation.
    pub async fn list_names_by_role(
        pool: &PgPool,
        role: &str,
    ) -> Result<Vec<UserName>, sqlx::Error> {
        sqlx::query_as::<_, UserName>(
            "SELECT id::BIGINT AS id, full_name
             FROM users
             WHERE role = $1
             ORDER BY full_name",
        )
        .bind(role)
        .fetch_all(pool)
        .await
    }

    /// Find a user whose name, PIN and role all match exactly.
    ///
    /// When several rows match, whichever the store yields first wins; no
    /// ordering is applied.
    pub async fn find_by_credentials(
        pool: &PgPool,
        credentials: &Credentials,
    ) -> Result<Option<UserSummary>, sqlx::Error> {
        sqlx::query_as::<_, UserSummary>(
            "SELECT id::BIGINT AS id, full_name, role
             FROM users
             WHERE full_name = $1 AND pin = $2 AND role = $3
             LIMIT 1",
        )
        .bind(&credentials.full_name)
        .bind(&credentials.pin)
        .bind(&credentials.role)
        .fetch_optional(pool)
        .await
    }
}
