use std::{net::SocketAddr, sync::Arc};

use app::AppState;
use config::{AppConfig, StoreBackend};
use database::AppDatabase;
use dotenvy::dotenv;
use store::{MemoryStore, SharedStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod app;
pub mod config;
pub mod constants;
pub mod database;
pub mod handlers;
pub mod models;
pub mod store;
pub mod swagger;
pub mod utils;

pub async fn start_web_server() -> anyhow::Result<()> {
    // import .env file
    dotenv().ok();
    initialize_logging();
    let config = AppConfig::from_env()?;
    let store = build_store(&config).await?;
    let state = AppState::new(store, config.otp_policy);
    start_server(config.port, state).await
}

fn initialize_logging() {
    // create default env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or("wecredit_backend_rust=debug,tower_http=debug".into());

    // initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

async fn build_store(config: &AppConfig) -> anyhow::Result<SharedStore> {
    match (config.backend, &config.mongo) {
        (StoreBackend::MongoDb, Some(mongo)) => {
            // create database client
            let db = AppDatabase::new(mongo).await?;
            db.ensure_schema().await?;
            Ok(Arc::new(db))
        }
        (StoreBackend::MongoDb, None) => Err(anyhow::anyhow!("MongoDB settings are missing")),
        (StoreBackend::Memory, _) => {
            tracing::warn!("Using in-memory store, data is lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

async fn start_server(port: u16, state: AppState) -> anyhow::Result<()> {
    // build the socket address
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    // create the app instance
    let app = app::build_app(state);
    tracing::info!("Starting the app in: {addr}");
    // start serving the app in the socket address
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {err}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => tracing::error!("Failed to listen for SIGTERM: {err}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
