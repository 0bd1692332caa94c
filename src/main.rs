//! Donation registry server binary

use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use donation_registry::config::ServiceConfig;
use donation_registry::server::{AppState, build_router};
use donation_registry::storage::{InMemoryStore, StoreFixtures};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter.clone())),
        )
        .init();

    let store = match &config.fixtures_path {
        Some(path) => {
            let fixtures = StoreFixtures::from_yaml_file(path)?;
            tracing::info!(path = %path.display(), "seeding store from fixtures");
            InMemoryStore::from_fixtures(fixtures)
        }
        None => InMemoryStore::new(),
    };

    let state = AppState::new(Arc::new(store));
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
