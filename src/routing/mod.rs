//! View routing subsystem.
//!
//! # Data Flow
//! ```text
//! Request path
//!     → router.rs (path → Route: List | Detail(id) | NotFound)
//!     → view.rs (Route + LoadState → View; Detail resolves or falls to NotFound)
//!     → render (View → HTML)
//! ```
//!
//! # Design Decisions
//! - Path parsing is independent of data; resolution happens against a snapshot
//! - An unknown id is a view, not an error
//! - Deterministic: same path and state always give the same view

pub mod router;
pub mod view;

pub use router::Route;
pub use view::View;
