//! Path → route parsing.
//!
//! # Routes
//! - `/` → `List`
//! - `/character/{id}` → `Detail(id)` for an integer id
//! - anything else → `NotFound`

/// Prefix of detail paths.
pub const DETAIL_PREFIX: &str = "/character/";

/// A parsed route, before any data lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(u32),
    NotFound,
}

impl Route {
    /// Parse a request path (no query string).
    pub fn from_path(path: &str) -> Self {
        if path == "/" || path.is_empty() {
            return Route::List;
        }

        match path.strip_prefix(DETAIL_PREFIX) {
            Some(id) => Self::from_id_segment(id.trim_end_matches('/')),
            None => Route::NotFound,
        }
    }

    /// Parse the `{id}` segment of a detail path.
    pub fn from_id_segment(segment: &str) -> Self {
        segment
            .parse::<u32>()
            .map(Route::Detail)
            .unwrap_or(Route::NotFound)
    }

    /// Path that renders this route; links are built from it.
    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Detail(id) => format!("{}{}", DETAIL_PREFIX, id),
            Route::NotFound => "/404".to_string(),
        }
    }
}
