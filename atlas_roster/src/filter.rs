//! Character filtering: free-text search combined with the three facets.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::entities::{Character, Difficulty, Role};
use crate::facets::Facet;

/// Message shown when no character survives the filters.
pub const NO_CHARACTERS_MESSAGE: &str =
    "No characters match your filters. Reset your search to rediscover the roster.";

/// The current search text and facet selections.
///
/// All predicates are conjunctive. The default matches every character.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CharacterFilter {
    pub search: String,
    pub role: Facet<Role>,
    pub difficulty: Facet<Difficulty>,
    pub tag: Facet<String>,
}

impl CharacterFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_role(mut self, role: Facet<Role>) -> Self {
        self.role = role;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Facet<Difficulty>) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_tag(mut self, tag: Facet<String>) -> Self {
        self.tag = tag;
        self
    }

    /// True when no search text and no facet narrows the roster.
    pub fn is_unfiltered(&self) -> bool {
        self.search.trim().is_empty()
            && self.role.is_all()
            && self.difficulty.is_all()
            && self.tag.is_all()
    }

    /// Case-insensitive substring match of the trimmed search text.
    pub fn matches_search(&self, character: &Character) -> bool {
        let term = self.search.trim();
        if term.is_empty() {
            return true;
        }
        character
            .search_haystack()
            .to_lowercase()
            .contains(&term.to_lowercase())
    }

    pub fn matches_tag(&self, character: &Character) -> bool {
        match &self.tag {
            Facet::All => true,
            Facet::Only(tag) => character.has_tag(tag),
        }
    }

    /// Check a single character against every predicate.
    pub fn matches(&self, character: &Character) -> bool {
        self.matches_search(character)
            && self.role.matches(&character.role)
            && self.difficulty.matches(&character.difficulty)
            && self.matches_tag(character)
    }

    /// The characters that pass the filter, in catalog order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Character> {
        catalog
            .characters()
            .iter()
            .filter(|character| self.matches(character))
            .collect()
    }
}
