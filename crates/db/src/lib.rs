//! PostgreSQL access for the `users` table.
//!
//! The pool is created once by the binary and shared through application
//! state; every query acquires a connection for its own duration only.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Pool sizing and acquire limits.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Create a connection pool from a database URL.
///
/// Connections are opened lazily on first use, so this only fails when the
/// URL itself cannot be parsed. Unless an SSL mode is configured, either as
/// an `sslmode` URL parameter or through `PGSSLMODE`, TLS is required but the
/// server certificate is not verified.
pub fn create_pool(database_url: &str, settings: &PoolSettings) -> Result<DbPool, sqlx::Error> {
    let mut options = PgConnectOptions::from_str(database_url)?;
    let env_ssl_mode = std::env::var("PGSSLMODE").ok();
    if !ssl_mode_configured(database_url, env_ssl_mode.as_deref()) {
        options = options.ssl_mode(PgSslMode::Require);
    }

    tracing::debug!(
        max_connections = settings.max_connections,
        acquire_timeout_secs = settings.acquire_timeout.as_secs(),
        "Creating lazy connection pool"
    );
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect_lazy_with(options);
    Ok(pool)
}

/// Round-trip a trivial query to confirm the store is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// `PgConnectOptions` already reads `PGSSLMODE`; a non-empty value there
/// counts the same as one in the URL.
fn ssl_mode_configured(database_url: &str, env_ssl_mode: Option<&str>) -> bool {
    let url = database_url.to_ascii_lowercase();
    url.contains("sslmode=")
        || url.contains("ssl-mode=")
        || env_ssl_mode.is_some_and(|mode| !mode.trim().is_empty())
}
