//! Startup orchestration.
//!
//! # Responsibilities
//! - Install the metrics exporter when enabled
//! - Build the character source (HTTP or fixture)
//! - Spawn the one-shot fetch, then serve while it runs
//! - Tie the fetch task's lifetime to the server's
//!
//! # Design Decisions
//! - Config arrives already validated
//! - A broken fixture file is a startup error; a failed fetch is a LoadError

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::config::{AppConfig, SourceConfig};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;
use crate::source::{ApiSource, CharacterSource, StaticSource};
use crate::state::{spawn_initial_fetch, CatalogStore};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Pick the source the config asks for.
pub fn build_source(config: &SourceConfig) -> Result<Arc<dyn CharacterSource>, BoxError> {
    match &config.fixture_path {
        Some(path) => Ok(Arc::new(StaticSource::from_file(Path::new(path))?)),
        None => Ok(Arc::new(ApiSource::from_config(config)?)),
    }
}

/// Serve on `listener` until `shutdown` fires.
pub async fn serve(
    config: AppConfig,
    listener: TcpListener,
    shutdown: broadcast::Receiver<()>,
) -> Result<(), BoxError> {
    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr);
    }

    let source = build_source(&config.source)?;
    let store = Arc::new(CatalogStore::new());
    let fetch = spawn_initial_fetch(source, store.clone());

    let result = HttpServer::new(config, store).run(listener, shutdown).await;

    // A fetch still in flight is dropped along with its result.
    fetch.abort();
    result?;
    Ok(())
}

/// Bind the configured address and serve until SIGINT/SIGTERM.
///
/// Returns as soon as the server stops on its own, so a startup failure
/// inside [`serve`] surfaces without waiting for a signal.
pub async fn run(config: AppConfig) -> Result<(), BoxError> {
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let mut server = tokio::spawn(serve(config, listener, shutdown.subscribe()));

    tokio::select! {
        result = &mut server => {
            if let Ok(Err(e)) = &result {
                tracing::error!(error = %e, "Server stopped before shutdown was requested");
            }
            return result?;
        }
        _ = signals::shutdown_signal() => {}
    }

    shutdown.trigger();
    server.await?
}
