//! Fish Stock Management - Backend Server
//!
//! Daily stock tracking for a fish vendor: purchases in, end-of-day
//! remaining stock, and the reconciliation reports derived from them.

use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fish_stock_backend::{
    create_app, services::CatalogService, store::RedisStore, AppState, Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "fsm_server=debug,fish_stock_backend=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Fish Stock Management Server");
    tracing::info!("Environment: {}", config.environment);

    // Connect to the key-value store
    tracing::info!("Connecting to store...");
    let store = Arc::new(RedisStore::connect(&config.redis.url).await?);
    tracing::info!("Store connection established");

    // Create application state
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };

    // Seed the default catalog on an empty store
    let seeded = CatalogService::new(state.store.clone())
        .ensure_defaults()
        .await
        .map_err(|err| anyhow::anyhow!("catalog seeding failed: {err}"))?;
    if seeded > 0 {
        tracing::info!("Seeded {} default fish types", seeded);
    }

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
