//! Fan-art records submitted by the community.

use serde::{Deserialize, Serialize};

use super::{CharacterId, FanArtId};

/// A single fan-art submission.
///
/// Field names serialize in camelCase so the stored blob keeps the shape the
/// gallery has always written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FanArt {
    pub id: FanArtId,
    /// Weak reference: the character may not exist in the catalog.
    pub character_id: CharacterId,
    pub artist: String,
    pub image_url: String,
    pub caption: String,
}

impl FanArt {
    pub fn new(
        id: FanArtId,
        character_id: impl Into<CharacterId>,
        artist: impl Into<String>,
        image_url: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Self {
            id,
            character_id: character_id.into(),
            artist: artist.into(),
            image_url: image_url.into(),
            caption: caption.into(),
        }
    }

    /// Check if this piece depicts the given character.
    pub fn depicts(&self, character_id: &CharacterId) -> bool {
        &self.character_id == character_id
    }
}
