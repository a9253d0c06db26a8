//! Active-character selection for the playbook view.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::entities::{Character, CharacterId};

/// The user's last explicit choice of character.
///
/// The character actually displayed is derived by [`Selection::resolve`], so
/// filter changes never overwrite the stored choice.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    chosen: Option<CharacterId>,
}

impl Selection {
    /// Start with the first catalog character chosen.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self {
            chosen: catalog.first().map(|c| c.id.clone()),
        }
    }

    pub fn chosen(&self) -> Option<&CharacterId> {
        self.chosen.as_ref()
    }

    /// Record an explicit card click.
    pub fn choose(&mut self, id: CharacterId) {
        self.chosen = Some(id);
    }

    /// The effective selection.
    ///
    /// 1. The stored choice, if it is among `filtered`
    /// 2. Otherwise the first filtered character
    /// 3. Otherwise the first catalog character, or `None` for an empty catalog
    pub fn resolve<'a>(
        &self,
        filtered: &[&'a Character],
        catalog: &'a Catalog,
    ) -> Option<&'a Character> {
        if let Some(chosen) = &self.chosen {
            if let Some(found) = filtered.iter().find(|c| &c.id == chosen) {
                return Some(*found);
            }
        }
        filtered.first().copied().or_else(|| catalog.first())
    }
}
