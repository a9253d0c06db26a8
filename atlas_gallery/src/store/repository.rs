//! Fan-art persistence adapter.

use atlas_roster::{seed_fan_art, FanArt};

use super::{KeyValueStore, StoreError};

/// Key the gallery has always been stored under.
pub const DEFAULT_FAN_ART_KEY: &str = "legend-atlas-fanart";

/// Loads and saves the whole fan-art list.
pub trait FanArtRepository {
    /// Read the stored list. `Ok(None)` means nothing is stored.
    fn load(&self) -> Result<Option<Vec<FanArt>>, StoreError>;

    /// Replace the stored list with a full snapshot.
    fn save(&mut self, entries: &[FanArt]) -> Result<(), StoreError>;
}

/// Stores the fan-art list as a JSON array under one key.
#[derive(Debug, Clone)]
pub struct KeyValueFanArtRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> KeyValueFanArtRepository<S> {
    /// Use the default key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_FAN_ART_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: KeyValueStore> FanArtRepository for KeyValueFanArtRepository<S> {
    fn load(&self) -> Result<Option<Vec<FanArt>>, StoreError> {
        match self.store.get(&self.key)? {
            Some(raw) if !raw.trim().is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
            _ => Ok(None),
        }
    }

    fn save(&mut self, entries: &[FanArt]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(entries)?;
        self.store.set(&self.key, &raw)
    }
}

/// Load the gallery at startup, falling back to the seed list.
///
/// A stored, parseable, non-empty list is used as-is. Anything else (missing,
/// blank, `[]`, unreadable or corrupt) yields the seed list, which is written
/// back so the next session starts clean. If that repair write fails the seed
/// is still returned.
pub fn load_or_seed<R: FanArtRepository + ?Sized>(repository: &mut R) -> Vec<FanArt> {
    match repository.load() {
        Ok(Some(entries)) if !entries.is_empty() => {
            log::info!("loaded {} stored fan art entries", entries.len());
            return entries;
        }
        Ok(_) => log::debug!("no stored fan art, seeding defaults"),
        Err(err) => log::warn!("stored fan art unusable, restoring defaults: {}", err),
    }

    let seed = seed_fan_art();
    if let Err(err) = repository.save(&seed) {
        log::warn!("failed to write default fan art: {}", err);
    }
    seed
}
