//! Configuration loaded from TOML.
//!
//! ```toml
//! [storage]
//! backend = "file"
//! directory = ".legend-atlas"
//! fan_art_key = "legend-atlas-fanart"
//! ```
//!
//! Every field is optional.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::store::{
    FileStore, KeyValueFanArtRepository, KeyValueStore, MemoryStore, DEFAULT_FAN_ART_KEY,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Which key-value backend holds the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    #[default]
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory used by the file backend.
    pub directory: PathBuf,
    pub fan_art_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            directory: PathBuf::from(".legend-atlas"),
            fan_art_key: DEFAULT_FAN_ART_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    pub storage: StorageConfig,
}

impl AtlasConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Open the configured key-value backend.
    pub fn open_store(&self) -> Box<dyn KeyValueStore> {
        match self.storage.backend {
            StorageBackend::Memory => Box::new(MemoryStore::new()),
            StorageBackend::File => Box::new(FileStore::new(self.storage.directory.clone())),
        }
    }

    /// The fan-art adapter over the configured backend and key.
    pub fn fan_art_repository(&self) -> KeyValueFanArtRepository<Box<dyn KeyValueStore>> {
        KeyValueFanArtRepository::with_key(self.open_store(), self.storage.fan_art_key.clone())
    }
}
