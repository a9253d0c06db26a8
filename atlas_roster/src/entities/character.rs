//! Character definitions.

use serde::{Deserialize, Serialize};

use super::{CharacterId, Difficulty, Role};

/// A named ability in a character's kit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub description: String,
}

impl Ability {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A step-by-step strategy guide embedded in a character's playbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guide {
    pub title: String,
    pub summary: String,
    pub steps: Vec<String>,
    pub tips: Vec<String>,
}

impl Guide {
    /// Create a guide with no steps or tips yet.
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            steps: Vec::new(),
            tips: Vec::new(),
        }
    }

    pub fn with_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps.extend(steps.into_iter().map(Into::into));
        self
    }

    pub fn with_tips<I, S>(mut self, tips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tips.extend(tips.into_iter().map(Into::into));
        self
    }
}

/// A playable specialist in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub alias: String,
    pub role: Role,
    pub difficulty: Difficulty,
    pub background: String,
    /// Order matters: the first ability is the signature one.
    pub abilities: Vec<Ability>,
    pub strengths: Vec<String>,
    pub guides: Vec<Guide>,
    /// Faction or affiliation the character fights for.
    #[serde(default)]
    pub element: String,
    /// URL of the portrait image. Never fetched.
    pub portrait: String,
    pub tags: Vec<String>,
}

impl Character {
    /// Create a new character with empty text fields and no kit.
    pub fn new(
        id: impl Into<CharacterId>,
        name: impl Into<String>,
        role: Role,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            alias: String::new(),
            role,
            difficulty,
            background: String::new(),
            abilities: Vec::new(),
            strengths: Vec::new(),
            guides: Vec::new(),
            element: String::new(),
            portrait: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = element.into();
        self
    }

    pub fn with_portrait(mut self, portrait: impl Into<String>) -> Self {
        self.portrait = portrait.into();
        self
    }

    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.abilities.push(ability);
        self
    }

    pub fn with_strengths<I, S>(mut self, strengths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strengths.extend(strengths.into_iter().map(Into::into));
        self
    }

    pub fn with_guide(mut self, guide: Guide) -> Self {
        self.guides.push(guide);
        self
    }

    /// Add tags, skipping any the character already carries.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            let tag = tag.into();
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
        self
    }

    /// The first ability in the kit, if any.
    pub fn signature_ability(&self) -> Option<&Ability> {
        self.abilities.first()
    }

    /// The first guide; its summary doubles as the card's combo blurb.
    pub fn headline_guide(&self) -> Option<&Guide> {
        self.guides.first()
    }

    /// Check if the character carries an exact tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Text the search box matches against: name, alias, background and tags.
    pub fn search_haystack(&self) -> String {
        let mut parts = vec![
            self.name.as_str(),
            self.alias.as_str(),
            self.background.as_str(),
        ];
        parts.extend(self.tags.iter().map(String::as_str));
        parts.join(" ")
    }

    /// Label used by the fan-art form's character picker.
    pub fn picker_label(&self) -> String {
        format!("{} — {}", self.name, self.alias)
    }
}
