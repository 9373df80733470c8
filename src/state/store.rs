//! Shared holder for the load state and the one-shot fetch task.

use std::sync::Arc;

use arc_swap::ArcSwap;
use tokio::task::JoinHandle;

use crate::observability::metrics;
use crate::source::CharacterSource;
use crate::state::LoadState;

/// Lock-free snapshot holder for [`LoadState`].
#[derive(Debug, Default)]
pub struct CatalogStore {
    state: ArcSwap<LoadState>,
}

impl CatalogStore {
    /// A store in the `Loading` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that starts from `state` (tests, fixtures).
    pub fn with_state(state: LoadState) -> Self {
        Self {
            state: ArcSwap::from_pointee(state),
        }
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> Arc<LoadState> {
        self.state.load_full()
    }

    /// Publish the fetch outcome. Only the first transition out of `Loading` sticks.
    pub fn publish(&self, next: LoadState) -> bool {
        let mut published = false;
        self.state.rcu(|current| {
            if current.is_loading() {
                published = true;
                Arc::new(next.clone())
            } else {
                published = false;
                Arc::clone(current)
            }
        });
        published
    }
}

/// Run the single startup fetch and publish its outcome into `store`.
///
/// Aborting the returned handle drops an in-flight request; nothing is published.
pub fn spawn_initial_fetch(
    source: Arc<dyn CharacterSource>,
    store: Arc<CatalogStore>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let label = source.describe();
        tracing::info!(source = %label, "Fetching character collection");

        let next = match source.fetch_characters().await {
            Ok(characters) => {
                tracing::info!(source = %label, count = characters.len(), "Character collection loaded");
                metrics::record_fetch("ok", characters.len());
                LoadState::Loaded(characters.into())
            }
            Err(e) => {
                tracing::error!(source = %label, error = %e, "Failed to load character collection");
                metrics::record_fetch("error", 0);
                LoadState::LoadError(e.to_string())
            }
        };

        if !store.publish(next) {
            tracing::warn!("Load state already settled, discarding fetch result");
        }
    })
}
