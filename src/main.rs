use cinemate::api::{create_router, AppState};
use cinemate::config::Config;
use cinemate::store::Domain;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    // Both artifacts are loaded and cross-checked once; everything after
    // this point treats them as immutable.
    let domain = Domain::load(&config.catalog_path, &config.similarity_path)?;
    let state = AppState::new(domain);

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "cinemate listening");
    axum::serve(listener, app).await?;
    Ok(())
}
