//! HTTP surface.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: timeout, request id, trace)
//!     → pages.rs (HTML: list, detail, not-found)
//!       or api.rs (JSON: characters, statuses, health)
//!     → snapshot of CatalogStore → routing::View → render
//! ```

pub mod api;
pub mod pages;
pub mod request;
pub mod server;

pub use request::{MakeRequestUuidV4, RequestIdExt, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
