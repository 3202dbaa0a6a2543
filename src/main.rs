//! Lotte translation service
//!
//! Main application entry point

use std::sync::Arc;

use tracing::info;

use lotte::{
    config::Settings,
    database::{connection, DatabaseService},
    handlers,
    state::AppContext,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    logging::init_logging(&settings.logging)?;

    info!("Starting Lotte translation service...");

    // Initialize database connection
    info!("Connecting to database...");
    let db_config = connection::DatabaseConfig::from(&settings.database);
    let db_pool = connection::create_pool(&db_config).await?;

    // Run database migrations
    connection::run_migrations(&db_pool).await?;

    // Wire up services and the router
    let store = Arc::new(DatabaseService::new(db_pool));
    let ctx = Arc::new(AppContext::new(settings.clone(), store));
    let app = handlers::router(ctx);

    let listener = tokio::net::TcpListener::bind(&settings.server.bind_addr).await?;
    info!("Listening on {}", settings.server.bind_addr);

    axum::serve(listener, app).await?;

    info!("Lotte translation service has been shut down.");

    Ok(())
}
