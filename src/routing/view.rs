//! Top-level view state machine.
//!
//! # States
//! - `List`: the filterable list (initial state)
//! - `Detail(id)`: one character
//! - `NotFound`: the id did not resolve
//!
//! # State Transitions
//! ```text
//! List      → Detail(id): follow a character link
//! Detail(id)→ NotFound:   id unknown, data not loaded yet, or load failed
//! Detail(id)→ List:       back link
//! NotFound  → List:       "try again" link
//! ```
//!
//! # Design Decisions
//! - No terminal state
//! - The current state lives in the request path, so each request resolves
//!   its view from scratch and nothing is held between navigations

use crate::catalog::{find_by_id, Character};
use crate::routing::Route;
use crate::state::LoadState;

/// A resolved view, borrowing from the load-state snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    List,
    Detail(&'a Character),
    NotFound,
}

impl<'a> View<'a> {
    /// Resolve a route against the current data.
    pub fn resolve(route: Route, state: &'a LoadState) -> Self {
        match route {
            Route::List => View::List,
            Route::Detail(id) => find_by_id(state.characters(), id)
                .map(View::Detail)
                .unwrap_or(View::NotFound),
            Route::NotFound => View::NotFound,
        }
    }

    /// Metric / log label.
    pub fn label(&self) -> &'static str {
        match self {
            View::List => "list",
            View::Detail(_) => "detail",
            View::NotFound => "not_found",
        }
    }
}
