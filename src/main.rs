//! Character browser (v1)
//!
//! A small server-rendered character catalog built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────────┐
//!                        │                CHARACTER BROWSER                  │
//!                        │                                                   │
//!   startup (once)       │  ┌──────────┐    ┌──────────────┐                 │
//!   ─────────────────────┼─▶│  source  │───▶│ CatalogStore │ Loading         │
//!   GET upstream API     │  │ api/file │    │  (ArcSwap)   │ → Loaded        │
//!                        │  └──────────┘    └──────┬───────┘ → LoadError     │
//!                        │                         │ snapshot                │
//!   Browser request      │  ┌─────────┐    ┌───────▼──────┐   ┌──────────┐   │
//!   ─────────────────────┼─▶│  http   │───▶│   routing    │──▶│  render  │   │
//!                        │  │ server  │    │ List/Detail/ │   │   HTML   │   │
//!   HTML / JSON          │  │         │◀───│   NotFound   │◀──│  or JSON │   │
//!   ◀────────────────────┼──│         │    └──────────────┘   └──────────┘   │
//!                        │  └─────────┘     catalog: FilterState + apply     │
//!                        │                                                   │
//!                        │  config · observability · lifecycle               │
//!                        └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use character_browser::config::{loader::read_config, validate_config, AppConfig, ConfigError};
use character_browser::lifecycle;
use character_browser::observability::logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "character-browser")]
#[command(about = "Filterable character catalog served over HTTP", long_about = None)]
struct Args {
    /// TOML config file; defaults apply when omitted.
    #[arg(short, long, env = "CHARACTER_BROWSER_CONFIG")]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long, env = "CHARACTER_BROWSER_BIND")]
    bind: Option<String>,

    /// Override `source.url`.
    #[arg(long, env = "CHARACTER_BROWSER_SOURCE_URL")]
    source_url: Option<String>,

    /// Serve characters from a JSON file instead of the upstream API.
    #[arg(long)]
    fixture: Option<String>,

    /// Override `observability.log_level`.
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn into_config(self) -> Result<AppConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => AppConfig::default(),
        };

        if let Some(bind) = self.bind {
            config.listener.bind_address = bind;
        }
        if let Some(url) = self.source_url {
            config.source.url = url;
        }
        if let Some(fixture) = self.fixture {
            config.source.fixture_path = Some(fixture);
        }
        if let Some(level) = self.log_level {
            config.observability.log_level = level;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Args::parse().into_config()?;

    init_logging(&config.observability);

    tracing::info!("character-browser v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        source = %config.source.fixture_path.as_deref().unwrap_or(&config.source.url),
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    lifecycle::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
