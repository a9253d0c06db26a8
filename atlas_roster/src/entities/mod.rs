//! Entity definitions for the roster.

mod character;
mod fan_art;

pub use character::*;
pub use fan_art::*;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Identifier of a character in the catalog (e.g. `"ember"`).
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CharacterId(pub String);

impl CharacterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CharacterId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a fan-art submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FanArtId(pub String);

impl FanArtId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create a fresh id for a new submission.
    pub fn generate() -> Self {
        Self(format!("fanart-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FanArtId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a label does not name a known role or difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLabelError {
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

/// Combat role of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Assassin,
    Support,
    Tank,
    Marksman,
    Mage,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Assassin,
        Role::Support,
        Role::Tank,
        Role::Marksman,
        Role::Mage,
    ];

    /// The display label, which is also the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Assassin => "Assassin",
            Role::Support => "Support",
            Role::Tank => "Tank",
            Role::Marksman => "Marksman",
            Role::Mage => "Mage",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ParseLabelError::UnknownRole(s.to_string()))
    }
}

/// How hard a character is to pick up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str() == s)
            .ok_or_else(|| ParseLabelError::UnknownDifficulty(s.to_string()))
    }
}
