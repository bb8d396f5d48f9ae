//! Pool setup for the todo database
//!
//! Every pool in the service is built from [`pool_options`], so the
//! connection cap and acquire timeout are the same for `serve`, `migrate`
//! and the test harness.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Connection cap when the CLI is given none.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a request waits for a free connection before failing.
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Options shared by every todo pool.
pub fn pool_options(max_connections: u32) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(max_connections.max(1))
        .acquire_timeout(ACQUIRE_TIMEOUT)
}

/// Connect with [`DEFAULT_MAX_CONNECTIONS`].
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Connect eagerly, so a bad URL or a down server fails at startup
/// rather than on the first request.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(max_connections, "connecting to todo database");
    pool_options(max_connections).connect(database_url).await
}
