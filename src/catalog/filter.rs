//! Filter criteria and the filter engine.
//!
//! # Responsibilities
//! - Hold the user's filter criteria (name, species, status set)
//! - Apply filter events through named operations only
//! - Produce the filtered view of a character collection
//! - Encode/decode criteria to a query string so views can link to each other
//!
//! # Design Decisions
//! - Name match is a case-insensitive substring match (both sides uppercased)
//! - Species uses the `"All"` sentinel for "no restriction"
//! - An empty status set means "no restriction"; several statuses are a union
//! - Stable filter: output keeps the input's relative order
//! - Recomputed on every call, nothing is cached

use std::collections::BTreeSet;

use serde::Serialize;
use url::form_urlencoded;

use crate::catalog::Character;

/// Species value that disables the species predicate.
pub const ALL_SPECIES: &str = "All";

/// A single user filter interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// Name input changed.
    Name(String),
    /// Species select changed.
    Species(String),
    /// Status checkbox clicked.
    Status(String),
}

/// Current filter criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterState {
    name_query: String,
    species_filter: String,
    status_set: BTreeSet<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            name_query: String::new(),
            species_filter: ALL_SPECIES.to_string(),
            status_set: BTreeSet::new(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name_query(&self) -> &str {
        &self.name_query
    }

    pub fn species_filter(&self) -> &str {
        &self.species_filter
    }

    pub fn statuses(&self) -> impl Iterator<Item = &str> {
        self.status_set.iter().map(String::as_str)
    }

    pub fn has_status(&self, status: &str) -> bool {
        self.status_set.contains(status)
    }

    /// True when every field holds its default.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Replace the name query.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name_query = value.into();
    }

    /// Replace the species filter.
    pub fn set_species(&mut self, value: impl Into<String>) {
        self.species_filter = value.into();
    }

    /// Add the status if absent, remove it if present.
    pub fn toggle_status(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !self.status_set.remove(&value) {
            self.status_set.insert(value);
        }
    }

    /// Restore all criteria to their defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Dispatch a filter event to the matching operation.
    pub fn apply_event(&mut self, event: FilterEvent) {
        match event {
            FilterEvent::Name(value) => self.set_name(value),
            FilterEvent::Species(value) => self.set_species(value),
            FilterEvent::Status(value) => self.toggle_status(value),
        }
    }

    /// Copy of this state with `status` toggled.
    pub fn with_status_toggled(&self, status: &str) -> Self {
        let mut next = self.clone();
        next.toggle_status(status);
        next
    }

    /// Rebuild criteria from `name=..&species=..&status=..&status=..`.
    ///
    /// Unknown keys are ignored. An empty species selects `"All"`.
    pub fn from_query(query: &str) -> Self {
        let mut state = Self::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let event = match key.as_ref() {
                "name" => FilterEvent::Name(value.into_owned()),
                "species" if value.is_empty() => FilterEvent::Species(ALL_SPECIES.to_string()),
                "species" => FilterEvent::Species(value.into_owned()),
                // repeated status params select; they never unselect
                "status" if value.is_empty() || state.has_status(&value) => continue,
                "status" => FilterEvent::Status(value.into_owned()),
                _ => continue,
            };
            state.apply_event(event);
        }

        state
    }

    /// Encode as a query string, omitting default fields.
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        if !self.name_query.is_empty() {
            serializer.append_pair("name", &self.name_query);
        }
        if self.species_filter != ALL_SPECIES {
            serializer.append_pair("species", &self.species_filter);
        }
        for status in &self.status_set {
            serializer.append_pair("status", status);
        }

        serializer.finish()
    }

    /// List view link carrying these criteria.
    pub fn href(&self) -> String {
        let query = self.to_query();
        if query.is_empty() {
            "/".to_string()
        } else {
            format!("/?{}", query)
        }
    }

    fn matches_name(&self, character: &Character) -> bool {
        character
            .name
            .to_uppercase()
            .contains(&self.name_query.to_uppercase())
    }

    fn matches_species(&self, character: &Character) -> bool {
        self.species_filter == ALL_SPECIES || character.species == self.species_filter
    }

    fn matches_status(&self, character: &Character) -> bool {
        self.status_set.is_empty() || self.status_set.contains(&character.status)
    }

    /// All three predicates, short-circuiting in order.
    pub fn matches(&self, character: &Character) -> bool {
        self.matches_name(character)
            && self.matches_species(character)
            && self.matches_status(character)
    }
}

/// Filter `characters` by `state`, preserving input order.
pub fn apply<'a>(characters: &'a [Character], state: &FilterState) -> Vec<&'a Character> {
    characters.iter().filter(|c| state.matches(c)).collect()
}
