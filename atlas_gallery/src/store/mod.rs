//! Local persistence - a key-value store and the fan-art adapter on top of it.
//!
//! The store mirrors browser local storage: string keys, string values, one
//! reader and writer. Backends:
//! - **MemoryStore**: ephemeral, used by tests and throwaway sessions
//! - **FileStore**: one file per key inside a directory

mod file;
mod memory;
mod repository;

pub use file::*;
pub use memory::*;
pub use repository::*;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by store backends and the fan-art adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid store key {0:?}")]
    InvalidKey(String),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode or decode stored value: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A string key-value store with local-storage semantics.
pub trait KeyValueStore {
    /// Read an entry. A missing key is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite an entry unconditionally.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
