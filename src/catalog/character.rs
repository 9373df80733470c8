//! Character record as served by the upstream API.

use serde::{Deserialize, Serialize};

/// One character from the upstream API. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub species: String,
    pub status: String,
    /// Avatar URL.
    pub image: String,

    #[serde(default)]
    pub gender: String,

    #[serde(default)]
    pub origin: Origin,

    /// Episode URLs the character appears in.
    #[serde(default)]
    pub episode: Vec<String>,
}

/// Place of origin, as a named reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Origin {
    #[serde(default)]
    pub name: String,
}

impl Character {
    /// Build a character with only the required fields set.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        species: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            species: species.into(),
            status: status.into(),
            image: String::new(),
            gender: String::new(),
            origin: Origin::default(),
            episode: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"id":1,"name":"Rick Sanchez","species":"Human","status":"Alive","image":"https://example.com/1.jpeg"}"#;
        let character: Character = serde_json::from_str(json).unwrap();

        assert_eq!(character.id, 1);
        assert_eq!(character.image, "https://example.com/1.jpeg");
        assert!(character.origin.name.is_empty());
        assert!(character.episode.is_empty());
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{
            "id": 3, "name": "Summer Smith", "species": "Human", "status": "Alive",
            "image": "x", "gender": "Female", "type": "",
            "origin": {"name": "Earth (Replacement Dimension)", "url": "u"},
            "location": {"name": "Earth", "url": "u"},
            "episode": ["e1", "e2"], "url": "u", "created": "2017-11-04T19:09:56.428Z"
        }"#;
        let character: Character = serde_json::from_str(json).unwrap();

        assert_eq!(character.gender, "Female");
        assert_eq!(character.origin.name, "Earth (Replacement Dimension)");
        assert_eq!(character.episode.len(), 2);
    }
}
