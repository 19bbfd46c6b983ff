use anyhow::Context;

use training_api::config::AppConfig;
use training_api::database::{bootstrap, Database};
use training_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Fail fast on missing or invalid configuration.
    let config = AppConfig::from_env().context("invalid configuration")?;

    let db = Database::connect(&config)
        .await
        .context("failed to connect to database")?;

    bootstrap::bootstrap(&db, &config)
        .await
        .context("database bootstrap failed")?;

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Training API listening on http://{}", bind_addr);

    let state = AppState::new(db.clone(), config);
    axum::serve(listener, training_api::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}
