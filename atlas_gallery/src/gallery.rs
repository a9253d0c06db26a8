//! The community fan-art gallery.

use atlas_roster::{Catalog, Character, CharacterId, FanArt, Facet};

/// Name shown when a fan-art entry points at a character we don't have.
pub const UNKNOWN_CHARACTER_LABEL: &str = "Unknown";

/// The user-extensible fan-art list, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FanArtGallery {
    entries: Vec<FanArt>,
}

impl FanArtGallery {
    pub fn new(entries: Vec<FanArt>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FanArt] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a new submission at the front.
    pub fn prepend(&mut self, entry: FanArt) {
        self.entries.insert(0, entry);
    }

    /// Entries for one character, or all of them.
    pub fn filtered(&self, filter: &Facet<CharacterId>) -> Vec<&FanArt> {
        self.entries
            .iter()
            .filter(|entry| filter.matches(&entry.character_id))
            .collect()
    }

    /// "Showing X of Y pieces." for the given filter.
    pub fn summary(&self, filter: &Facet<CharacterId>) -> String {
        format!(
            "Showing {} of {} pieces.",
            self.filtered(filter).len(),
            self.len()
        )
    }
}

/// A fan-art entry paired with the character it depicts, if that still exists.
#[derive(Debug, Clone, Copy)]
pub struct FanArtCredit<'a> {
    pub entry: &'a FanArt,
    pub character: Option<&'a Character>,
}

impl<'a> FanArtCredit<'a> {
    pub fn lookup(catalog: &'a Catalog, entry: &'a FanArt) -> Self {
        Self {
            entry,
            character: catalog.get(&entry.character_id),
        }
    }

    /// Character name, or the unknown-character placeholder.
    pub fn character_name(&self) -> &'a str {
        self.character
            .map(|c| c.name.as_str())
            .unwrap_or(UNKNOWN_CHARACTER_LABEL)
    }

    /// Image alt text, e.g. "Kaio Rime fan art by Frostbyte".
    pub fn alt_text(&self) -> String {
        let subject = self.character.map(|c| c.name.as_str()).unwrap_or("Legend");
        format!("{} fan art by {}", subject, self.entry.artist)
    }

    pub fn byline(&self) -> String {
        format!("By {}", self.entry.artist)
    }
}

/// Message shown when the current gallery filter matches nothing.
pub fn empty_gallery_message(catalog: &Catalog, filter: &Facet<CharacterId>) -> String {
    let target = match filter {
        Facet::All => "the roster",
        Facet::Only(id) => catalog
            .get(id)
            .map(|c| c.name.as_str())
            .unwrap_or("this specialist"),
    };
    format!("No fan art yet. Be the first to share your masterpiece for {target}.")
}
