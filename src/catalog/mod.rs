//! Character catalog: the records and the logic that runs over them.
//!
//! # Data Flow
//! ```text
//! Vec<Character> (fetched once, read-only)
//!     → filter.rs (FilterState + apply: name / species / status)
//!     → values.rs (distinct statuses / species for the filter controls)
//!     → find_by_id (detail view lookup)
//! ```
//!
//! # Design Decisions
//! - Everything here is pure; no I/O, no shared state
//! - Filtering borrows from the collection instead of cloning records
//! - Lookup is a linear scan (collections are tens to low hundreds of records)

pub mod character;
pub mod filter;
pub mod values;

pub use character::{Character, Origin};
pub use filter::{apply, FilterEvent, FilterState, ALL_SPECIES};
pub use values::distinct;

/// Find a character by exact id.
pub fn find_by_id(characters: &[Character], id: u32) -> Option<&Character> {
    characters.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_id() {
        let characters = vec![
            Character::new(1, "Rick Sanchez", "Human", "Alive"),
            Character::new(2, "Morty Smith", "Human", "Alive"),
        ];

        assert_eq!(find_by_id(&characters, 2).map(|c| c.name.as_str()), Some("Morty Smith"));
        assert!(find_by_id(&characters, 3).is_none());
    }

    #[test]
    fn test_find_by_id_before_fetch() {
        assert!(find_by_id(&[], 1).is_none());
    }
}
