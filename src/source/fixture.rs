//! In-memory source, optionally loaded from a JSON fixture on disk.

use std::path::Path;

use async_trait::async_trait;

use crate::catalog::Character;
use crate::source::{payload, CharacterSource, FetchError};

/// Serves a fixed collection. Used for offline runs and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    characters: Vec<Character>,
    origin: String,
}

impl StaticSource {
    pub fn new(characters: Vec<Character>) -> Self {
        Self {
            characters,
            origin: "memory".to_string(),
        }
    }

    /// Read a fixture in either payload shape the API source accepts.
    pub fn from_file(path: &Path) -> Result<Self, FetchError> {
        let body = std::fs::read(path).map_err(|source| FetchError::Fixture {
            path: path.display().to_string(),
            source,
        })?;
        let characters = payload::decode(&body)?;

        tracing::info!(path = %path.display(), count = characters.len(), "Loaded character fixture");
        Ok(Self {
            characters,
            origin: path.display().to_string(),
        })
    }
}

#[async_trait]
impl CharacterSource for StaticSource {
    async fn fetch_characters(&self) -> Result<Vec<Character>, FetchError> {
        Ok(self.characters.clone())
    }

    fn describe(&self) -> String {
        format!("static:{}", self.origin)
    }
}
