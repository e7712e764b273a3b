//! Kube Readiness server binary.
//!
//! Loads configuration from the environment, opens the configured store,
//! seeds the sample catalog when enabled and serves the HTTP API until
//! Ctrl-C or SIGTERM.

use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use kube_readiness::adapters::http::{build_app, AppState};
use kube_readiness::adapters::storage::{FileStore, InMemoryStore, SampleData};
use kube_readiness::config::{AppConfig, LogFormat, ServerConfig, StorageBackend};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let state = open_store(&config).await?;
    let app = build_app(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        backend = ?config.storage.backend,
        "Kube Readiness listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured log level.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    match server.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

async fn open_store(config: &AppConfig) -> Result<AppState, Box<dyn Error>> {
    let seed = config.storage.seed_sample_data;

    match config.storage.backend {
        StorageBackend::File => {
            let store = FileStore::open(&config.storage.data_dir).await?;
            if seed {
                store.seed(&SampleData::load()?).await?;
            }
            Ok(AppState::from_store(Arc::new(store)))
        }
        StorageBackend::Memory => {
            let store = InMemoryStore::new();
            if seed && store.seed(&SampleData::load()?).await {
                tracing::info!("Seeded in-memory store with sample data");
            }
            Ok(AppState::from_store(Arc::new(store)))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
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
