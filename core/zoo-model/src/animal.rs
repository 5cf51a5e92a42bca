use serde::{Deserialize, Serialize};

/// A stored animal record.
///
/// The `id` is assigned by the store at creation time and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: String,
    pub name: String,
    pub species: String,
    pub diet: String,
    pub personality_traits: Vec<String>,
}

impl Animal {
    /// Whether this animal lists `trait_name` among its personality traits.
    pub fn has_trait(&self, trait_name: &str) -> bool {
        self.personality_traits.iter().any(|t| t == trait_name)
    }
}

/// A candidate record as submitted by a client, before an id is assigned.
///
/// Any `id` the client sends is ignored; unknown fields are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAnimal {
    pub name: String,
    pub species: String,
    pub diet: String,
    pub personality_traits: Vec<String>,
}

impl NewAnimal {
    /// Attach a store-assigned id, producing the stored record.
    pub fn with_id(self, id: impl Into<String>) -> Animal {
        Animal {
            id: id.into(),
            name: self.name,
            species: self.species,
            diet: self.diet,
            personality_traits: self.personality_traits,
        }
    }
}
