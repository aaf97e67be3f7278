use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use movie_recommender::{
    config::Config,
    data::RecommendationContext,
    routes::{create_router, AppState},
    services::TmdbProvider,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("movie_recommender=info,tower_http=info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Startup failed");
        return Err(e);
    }

    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Load catalog and similarity matrix once; the server never starts without them
    let data_dir = config.resolve_data_dir()?;
    let context = RecommendationContext::load(&data_dir)
        .with_context(|| format!("Failed to load data from {}", data_dir.display()))?;

    let posters = TmdbProvider::from_config(&config)?;
    let state = AppState::new(Arc::new(context), Arc::new(posters));

    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
