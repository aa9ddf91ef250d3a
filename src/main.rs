use clap::Parser;
use recipe_catalog::api;
use recipe_catalog::config::ServiceConfig;
use recipe_catalog::ingestion::loader::Loader;
use recipe_catalog::search::engine::RecipeCatalog;
use recipe_catalog::storage::memory::MemoryStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::parse();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    // 1. Storage:
    let store = Arc::new(MemoryStore::new());

    // 2. Seed import. A failed load stops startup before anything is served.
    let loader = Loader::new(store.clone());
    loader.load(&config.seed_source()).await?;

    // 3. HTTP Router:
    let catalog = Arc::new(RecipeCatalog::new(store));
    let app = api::router(catalog);

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
