use crate::config::Config;
use crate::db::create_db_pool;
use crate::store::{BiztimeStore, PgStore};
use std::sync::Arc;

/// Shared application state. All per-request data lives in the database;
/// the only thing handlers share is the store behind its trait seam.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BiztimeStore>,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        let config = Config::from_env()?;
        let pool = create_db_pool(&config.database).await?;

        Ok(AppState {
            store: Arc::new(PgStore::new(pool)),
        })
    }

    /// Build state around any store implementation. Tests use this with an
    /// in-memory double.
    pub fn with_store(store: Arc<dyn BiztimeStore>) -> Self {
        AppState { store }
    }
}
