use bcrypt::{hash, DEFAULT_COST};
use thiserror::Error;
use tracing::info;

use super::Database;
use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("failed to hash admin password: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL
)
"#;

const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    price DOUBLE PRECISION NOT NULL
)
"#;

/// Idempotent schema bootstrap: create the `users` and `products` tables if
/// absent and seed the administrator account. Safe to run on every startup;
/// the seed insert is a no-op when the admin row already exists.
pub async fn bootstrap(db: &Database, config: &AppConfig) -> Result<(), BootstrapError> {
    sqlx::query(CREATE_USERS_TABLE).execute(db.pool()).await?;
    info!("users table created or already exists");

    sqlx::query(CREATE_PRODUCTS_TABLE).execute(db.pool()).await?;
    info!("products table created or already exists");

    let password_hash = hash(&config.admin_password, DEFAULT_COST)?;

    sqlx::query(
        "INSERT INTO users (username, password_hash) VALUES ($1, $2) \
         ON CONFLICT (username) DO NOTHING",
    )
    .bind(&config.admin_username)
    .bind(&password_hash)
    .execute(db.pool())
    .await?;
    info!("admin user created or already exists");

    Ok(())
}
