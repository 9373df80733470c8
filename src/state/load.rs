//! Tagged load state for the character collection.

use std::sync::Arc;

use crate::catalog::Character;

/// Where the one-shot fetch currently stands.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Arc<[Character]>),
    LoadError(String),
}

impl LoadState {
    /// Characters available for rendering; empty unless loaded.
    pub fn characters(&self) -> &[Character] {
        match self {
            LoadState::Loaded(characters) => &characters[..],
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::LoadError(reason) => Some(reason.as_str()),
            _ => None,
        }
    }

    /// Stable label for logs, metrics and the health endpoint.
    pub fn label(&self) -> &'static str {
        match self {
            LoadState::Loading => "loading",
            LoadState::Loaded(_) => "loaded",
            LoadState::LoadError(_) => "error",
        }
    }
}
