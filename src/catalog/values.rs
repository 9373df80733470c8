//! Distinct field values, used to build the filter controls.

use std::collections::HashSet;

use crate::catalog::Character;

/// Unique values of `field` across `characters`, in first-seen order.
pub fn distinct<F>(characters: &[Character], field: F) -> Vec<String>
where
    F: Fn(&Character) -> &str,
{
    let mut seen = HashSet::new();
    characters
        .iter()
        .map(|c| field(c))
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}
