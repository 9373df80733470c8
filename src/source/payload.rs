//! Upstream payload shapes.
//!
//! The public API wraps the list as `{ "info": {..}, "results": [..] }`;
//! fixtures and simpler mirrors serve a bare array. Both are accepted.
//! The body's first token picks the shape, so a decode error names the
//! field or position that broke rather than just "no shape matched".

use serde::Deserialize;

use crate::catalog::Character;
use crate::source::FetchError;

#[derive(Debug, Deserialize)]
struct Paged {
    results: Vec<Character>,
}

/// Decode a payload body into characters.
pub fn decode(body: &[u8]) -> Result<Vec<Character>, FetchError> {
    let first = body.iter().find(|b| !b.is_ascii_whitespace());
    if first == Some(&b'{') {
        let paged: Paged = serde_json::from_slice(body)?;
        Ok(paged.results)
    } else {
        Ok(serde_json::from_slice(body)?)
    }
}
