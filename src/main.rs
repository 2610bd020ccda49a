//! Studio Server - body-art studio website backend

use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use studio_server::{config::AppConfig, create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing: console output plus an error-only log file
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("studio_server={},tower_http=debug", config.logging.level).into());

    let error_file = tracing_appender::rolling::never(&config.logging.error_log_dir, "error.log");
    let (error_writer, _error_guard) = tracing_appender::non_blocking(error_file);
    let error_layer = fmt::layer()
        .with_writer(error_writer)
        .with_ansi(false)
        .with_filter(LevelFilter::ERROR);

    let console_layer = if config.logging.format == "json" {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(error_layer)
        .init();

    tracing::info!("Starting Studio Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;

    tracing::info!("Database migrations completed");

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let bootstrap = config.admin.clone();

    let state = AppState::new(config, pool);

    // Upsert the configured admin account, if any
    if let (Some(email), Some(password)) = (bootstrap.bootstrap_email, bootstrap.bootstrap_password) {
        let admin = state.services.auth.ensure_admin(&email, &password).await?;
        tracing::info!("Admin account {} is provisioned", admin.email);
    }

    // Build router
    let app = create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
