use anyhow::Context;
use rusqlite::Connection;
use tracing::info;

use taxlens_api::{AppState, Config, create_app, store};
use taxlens_core::WeightTable;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("taxlens=debug,info")),
        )
        .with_target(false)
        .init();

    let config = Config::from_env();

    // A missing or malformed weight source is fatal: the process must not
    // serve proportional allocation without a usable table.
    let weights = WeightTable::load(&config.budget_path)
        .with_context(|| format!("failed to load weight table from {}", config.budget_path))?;

    let db = Connection::open(&config.db_path)
        .with_context(|| format!("failed to open database at {}", config.db_path))?;
    store::init_schema(&db).context("failed to create tax_records schema")?;

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(weights, db, config);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "taxlens server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
