//! Database connection pool management
//!
//! Uses sqlx PgPool with a fixed connection limit.

use sqlx::postgres::{PgConnection, PgPoolOptions};
use sqlx::{Connection, PgPool};

use crate::config::Config;

/// Maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool from service configuration.
///
/// One direct connection is opened and closed first, so an unreachable
/// store fails immediately with the driver's own error instead of a pool
/// acquire timeout. The pool itself connects lazily.
///
/// # Errors
///
/// Returns an error if the first connection cannot be established.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&Config::default()).await?;
/// ```
pub async fn create_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(url = %config.database_url(), "connecting to database");
    let options = config.connect_options();

    PgConnection::connect_with(&options).await?.close().await?;

    Ok(PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_lazy_with(options))
}

/// Round-trip a trivial query to prove the store is reachable.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
