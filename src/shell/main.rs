use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use events_api::config::Config;
use events_api::shell::http::router;
use events_api::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    tracing::info!("starting events api");
    let config = Config::from_env()?;

    // In-memory store for now
    let app = router(AppState::in_memory());

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
