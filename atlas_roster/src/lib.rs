//! # Atlas Roster
//!
//! The character side of Legend Atlas: the built-in catalog of specialists and
//! every pure derivation over it. Nothing in this crate mutates the catalog or
//! touches storage.
//!
//! ## Core Components
//!
//! - **entities**: Characters, guides, fan-art records and their identifiers
//! - **catalog**: The immutable roster plus the seed fan-art list
//! - **facets**: Role, difficulty and tag filter options
//! - **filter**: Search and facet matching over the roster
//! - **selection**: Which character the playbook view shows

pub mod catalog;
pub mod entities;
pub mod facets;
pub mod filter;
pub mod selection;

pub use catalog::*;
pub use entities::*;
pub use facets::*;
pub use filter::*;
pub use selection::*;
