//! Character browser library.
//!
//! Fetches a character collection once at startup and serves a filterable
//! list view, per-character detail views and a JSON mirror of both.

// Core
pub mod catalog;
pub mod routing;
pub mod source;
pub mod state;

// Surfaces
pub mod http;
pub mod render;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use catalog::{Character, FilterState};
pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use state::{CatalogStore, LoadState};
