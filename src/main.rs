use std::sync::Arc;

use tasterealm_api::{
    api::{create_router, AppState},
    config::Config,
    db::{self, InMemoryRepository, PgTasteRepository},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tasterealm_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let schema = config.schema()?;
    let in_memory = std::env::args().any(|arg| arg == "--in-memory");

    // Initialize application state
    let state = if in_memory {
        tracing::warn!("Running with an in-memory store, data is lost on exit");
        AppState::new(Arc::new(InMemoryRepository::seeded()), schema)
    } else {
        let pool = db::create_pool(&config.database_url, config.db_max_connections).await?;
        if config.run_migrations {
            db::run_migrations(&pool).await?;
        }
        AppState::new(Arc::new(PgTasteRepository::new(pool)), schema)
    };

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(
        address = %address,
        schema = schema.version,
        fields = ?schema.field_names(),
        "Server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
