//! Facets: the role, difficulty and tag filter dimensions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::entities::{Difficulty, Role};

/// Label shown for the wildcard choice.
pub const ALL_LABEL: &str = "All";

/// A facet selection: the wildcard or one exact value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facet<T> {
    All,
    Only(T),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Facet::All
    }
}

impl<T: PartialEq> Facet<T> {
    /// `All` matches everything, `Only(v)` matches exactly `v`.
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(wanted) => wanted == value,
        }
    }
}

impl<T> Facet<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Facet::All => None,
            Facet::Only(value) => Some(value),
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Facet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Facet::All => f.write_str(ALL_LABEL),
            Facet::Only(value) => write!(f, "{}", value),
        }
    }
}

/// Filter choices available for the current catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOptions {
    pub roles: Vec<Facet<Role>>,
    pub difficulties: Vec<Facet<Difficulty>>,
    pub tags: Vec<Facet<String>>,
}

impl FacetOptions {
    /// Derive the options from a catalog.
    ///
    /// Each list starts with `Facet::All`, followed by the distinct values in
    /// lexicographic order of their labels.
    pub fn derive(catalog: &Catalog) -> Self {
        let characters = catalog.characters();

        let mut roles: Vec<Role> = characters.iter().map(|c| c.role).collect();
        roles.sort_by_key(|role| role.as_str());
        roles.dedup();

        let mut difficulties: Vec<Difficulty> =
            characters.iter().map(|c| c.difficulty).collect();
        difficulties.sort_by_key(|difficulty| difficulty.as_str());
        difficulties.dedup();

        let tags: BTreeSet<&str> = characters
            .iter()
            .flat_map(|c| c.tags.iter().map(String::as_str))
            .collect();

        Self {
            roles: with_sentinel(roles.into_iter()),
            difficulties: with_sentinel(difficulties.into_iter()),
            tags: with_sentinel(tags.into_iter().map(str::to_string)),
        }
    }
}

fn with_sentinel<T>(values: impl Iterator<Item = T>) -> Vec<Facet<T>> {
    std::iter::once(Facet::All)
        .chain(values.map(Facet::Only))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Character;

    fn labels<T: std::fmt::Display>(facets: &[Facet<T>]) -> Vec<String> {
        facets.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_facet_matches() {
        assert!(Facet::All.matches(&Role::Tank));
        assert!(Facet::Only(Role::Tank).matches(&Role::Tank));
        assert!(!Facet::Only(Role::Tank).matches(&Role::Mage));
    }

    #[test]
    fn test_builtin_options() {
        let options = FacetOptions::derive(&Catalog::builtin());

        assert_eq!(
            labels(&options.roles),
            vec!["All", "Assassin", "Marksman", "Support", "Tank"]
        );
        assert_eq!(
            labels(&options.difficulties),
            vec!["All", "Advanced", "Beginner", "Intermediate"]
        );
        assert_eq!(
            labels(&options.tags),
            vec![
                "All",
                "Beginner Friendly",
                "Burst",
                "Control",
                "Frontline",
                "Healer",
                "High Skill",
                "Initiator",
                "Mobility",
                "Sniper",
                "Utility",
                "Vision",
            ]
        );
    }

    #[test]
    fn test_options_have_no_duplicates() {
        let options = FacetOptions::derive(&Catalog::builtin());
        let tags = labels(&options.tags);
        let unique: BTreeSet<_> = tags.iter().collect();
        assert_eq!(unique.len(), tags.len());
        // "Burst" is carried by two characters
        assert_eq!(tags.iter().filter(|t| *t == "Burst").count(), 1);
    }

    #[test]
    fn test_shared_role_listed_once_in_label_order() {
        let catalog = Catalog::new(vec![
            Character::new("a", "A", Role::Tank, Difficulty::Advanced),
            Character::new("b", "B", Role::Mage, Difficulty::Beginner),
            Character::new("c", "C", Role::Tank, Difficulty::Advanced),
            Character::new("d", "D", Role::Assassin, Difficulty::Beginner),
        ])
        .unwrap();
        let options = FacetOptions::derive(&catalog);
        assert_eq!(
            options.roles,
            vec![
                Facet::All,
                Facet::Only(Role::Assassin),
                Facet::Only(Role::Mage),
                Facet::Only(Role::Tank),
            ]
        );
        assert_eq!(
            options.difficulties,
            vec![
                Facet::All,
                Facet::Only(Difficulty::Advanced),
                Facet::Only(Difficulty::Beginner),
            ]
        );
    }

    #[test]
    fn test_empty_catalog_only_has_sentinel() {
        let options = FacetOptions::derive(&Catalog::empty());
        assert_eq!(options.roles, vec![Facet::All]);
        assert_eq!(options.difficulties, vec![Facet::All]);
        assert_eq!(options.tags, vec![Facet::All]);
    }

    #[test]
    fn test_single_character_catalog() {
        let catalog = Catalog::new(vec![Character::new(
            "vex",
            "Vex",
            Role::Mage,
            Difficulty::Beginner,
        )
        .with_tags(["Zone"])])
        .unwrap();
        let options = FacetOptions::derive(&catalog);
        assert_eq!(options.roles, vec![Facet::All, Facet::Only(Role::Mage)]);
        assert_eq!(options.tags, vec![Facet::All, Facet::Only("Zone".to_string())]);
    }
}
