//! Character data source subsystem.
//!
//! # Data Flow
//! ```text
//! startup
//!     → CharacterSource::fetch_characters() (exactly once)
//!     → api.rs: GET source.url → payload.rs decode → Vec<Character>
//!       or fixture.rs: in-memory / JSON file → Vec<Character>
//!     → state::CatalogStore publishes Loaded / LoadError
//! ```
//!
//! # Design Decisions
//! - One request, no retry, no pagination
//! - Every failure is a typed FetchError; callers turn it into LoadError
//! - Trait object seam so tests and offline runs swap the HTTP client out

pub mod api;
pub mod error;
pub mod fixture;
pub mod payload;

use async_trait::async_trait;

use crate::catalog::Character;

pub use api::ApiSource;
pub use error::FetchError;
pub use fixture::StaticSource;

/// Anything that can produce the character collection.
#[async_trait]
pub trait CharacterSource: Send + Sync {
    /// Fetch the full collection.
    async fn fetch_characters(&self) -> Result<Vec<Character>, FetchError>;

    /// Short label for logs.
    fn describe(&self) -> String;
}
