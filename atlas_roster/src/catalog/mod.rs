//! The catalog - the fixed roster of characters.

mod builtin;

pub use builtin::seed_fan_art;

use std::collections::HashSet;
use thiserror::Error;

use crate::entities::{Character, CharacterId};

/// Errors raised while assembling a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate character id: {0}")]
    DuplicateCharacterId(CharacterId),
}

/// An immutable, ordered list of characters with unique ids.
///
/// Order is the display order; filtering never reorders it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    characters: Vec<Character>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(characters: Vec<Character>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for character in &characters {
            if !seen.insert(&character.id) {
                return Err(CatalogError::DuplicateCharacterId(character.id.clone()));
            }
        }
        Ok(Self { characters })
    }

    /// A catalog with no characters.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The roster shipped with Legend Atlas.
    pub fn builtin() -> Self {
        Self {
            characters: builtin::characters(),
        }
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Get character by ID.
    pub fn get(&self, id: &CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| &c.id == id)
    }

    pub fn first(&self) -> Option<&Character> {
        self.characters.first()
    }

    pub fn contains(&self, id: &CharacterId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Total number of guides across every character.
    pub fn total_guides(&self) -> usize {
        self.characters.iter().map(|c| c.guides.len()).sum()
    }
}
