//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validated config → metrics → source → store + fetch task → serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → stop accepting → drain → abort fetch → exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, listener last
//! - Fail fast: any startup error is fatal
//! - The startup fetch never blocks serving; pages render `Loading` meanwhile

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{build_source, run, serve, BoxError};
