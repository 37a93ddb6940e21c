//! PostgreSQL connection pool setup.

use crate::{config::DatabaseConfig, error::AppError, Result};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use tracing::info;

pub async fn create_db_pool(config: &DatabaseConfig) -> Result<PgPool> {
    info!("initializing database connection pool");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
        .max_lifetime(Duration::from_secs(config.max_lifetime_seconds))
        .connect(&config.url)
        .await
        .map_err(|e| AppError::configuration(format!("failed to connect to database: {}", e)))?;

    // Probe the connection before handing the pool out
    sqlx::query("SELECT 1")
        .fetch_one(&pool)
        .await
        .map_err(|e| AppError::configuration(format!("database health check failed: {}", e)))?;

    info!("database connection pool initialized");

    Ok(pool)
}
