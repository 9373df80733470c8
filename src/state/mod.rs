//! Application load state.
//!
//! # State Machine
//! ```text
//! Loading ──fetch ok──▶ Loaded(characters)
//!    │
//!    └────fetch err──▶ LoadError(reason)
//! ```
//!
//! # Design Decisions
//! - Loading is left exactly once; Loaded and LoadError are final
//! - A failed fetch is a visible state, never an endless spinner
//! - Readers snapshot the state lock-free (ArcSwap); one writer, one write

pub mod load;
pub mod store;

pub use load::LoadState;
pub use store::{spawn_initial_fetch, CatalogStore};
