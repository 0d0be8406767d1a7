//! PostgreSQL connection pool management

use std::time::Duration;

use chatroom_common::DatabaseConfig;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, instrument};

/// Idle connections are closed after this long
const IDLE_TIMEOUT: Duration = Duration::from_secs(300);

/// Connections are recycled after this long
const MAX_LIFETIME: Duration = Duration::from_secs(1800);

/// Create a new PostgreSQL connection pool
#[instrument(skip_all, fields(max = config.max_connections, min = config.min_connections))]
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(IDLE_TIMEOUT)
        .max_lifetime(MAX_LIFETIME)
        .connect(&config.url)
        .await?;

    info!("Database pool created");
    Ok(pool)
}

/// Round-trip a trivial query to check the database is reachable
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}
