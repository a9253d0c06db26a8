//! # Atlas Gallery
//!
//! The interactive half of Legend Atlas. This crate builds on `atlas_roster`,
//! keeps the community fan-art gallery in a local key-value store, validates
//! new submissions and drives the page state through a single update cycle.
//!
//! ## Core Components
//!
//! - **store**: Key-value backends and the fan-art persistence adapter
//! - **gallery**: The mutable, most-recent-first fan-art list
//! - **submission**: The fan-art form and its validation rules
//! - **session**: Page state updated one event at a time
//! - **config**: TOML configuration for the storage backend

pub mod config;
pub mod gallery;
pub mod session;
pub mod store;
pub mod submission;

pub use config::*;
pub use gallery::*;
pub use session::*;
pub use store::*;
pub use submission::*;
