pub mod bootstrap;
pub mod models;

use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::config::AppConfig;

/// Owned handle to the shared connection pool.
///
/// Opened once at process start, cloned into every handler through
/// [`crate::state::AppState`], and closed at shutdown. There is deliberately
/// no retry, timeout, or reconnect logic here: callers see raw
/// [`sqlx::Error`] values and translate them at the HTTP boundary.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect eagerly so a bad `DATABASE_URL` fails at startup.
    pub async fn connect(config: &AppConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;

        info!("connected to database");
        Ok(Self { pool })
    }

    /// Wrap an existing pool. Used by tests that build the router in-process.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Pings the pool to ensure connectivity.
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the pool on shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("database pool closed");
    }
}
