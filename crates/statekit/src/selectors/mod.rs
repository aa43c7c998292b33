#[cfg(test)]
mod tests;

use crate::{
    error::Error,
    key::Key,
    page::PageInfo,
    state::{EntityState, EntityStateFn},
};
use std::{collections::BTreeMap, sync::Arc};

///
/// SelectorMap
///
/// Read-side accessors for one entity slice. Every selector resolves the
/// slice through the shared deriver, so a missing slice surfaces the same
/// error no matter which view is asked for.
///

pub struct SelectorMap<P, M, X = ()> {
    derive: EntityStateFn<P, M, X>,
}

impl<P, M, X> Clone for SelectorMap<P, M, X> {
    fn clone(&self) -> Self {
        Self {
            derive: Arc::clone(&self.derive),
        }
    }
}

impl<P, M: 'static, X: 'static> SelectorMap<P, M, X> {
    #[must_use]
    pub const fn new(derive: EntityStateFn<P, M, X>) -> Self {
        Self { derive }
    }

    /// Resolves the whole slice from the parent state.
    pub fn state<'a>(&self, parent: &'a P) -> Result<&'a EntityState<M, X>, Error> {
        (self.derive)(parent)
    }

    /// All entities, in `ids` order.
    pub fn all<'a>(&self, parent: &'a P) -> Result<Vec<&'a M>, Error> {
        let state = self.state(parent)?;

        Ok(state
            .ids
            .iter()
            .filter_map(|id| state.entities.get(id))
            .collect())
    }

    /// The key-sorted entity map.
    pub fn entities<'a>(&self, parent: &'a P) -> Result<&'a BTreeMap<Key, M>, Error> {
        Ok(&self.state(parent)?.entities)
    }

    /// Presentation-order keys.
    pub fn ids<'a>(&self, parent: &'a P) -> Result<&'a [Key], Error> {
        Ok(&self.state(parent)?.ids)
    }

    /// Number of entities currently held by the slice.
    pub fn total(&self, parent: &P) -> Result<usize, Error> {
        Ok(self.state(parent)?.ids.len())
    }

    // ── Tracking ───────────────────────────────────────

    pub fn current_key<'a>(&self, parent: &'a P) -> Result<Option<&'a Key>, Error> {
        Ok(self.state(parent)?.current_entity_key.as_ref())
    }

    /// The entity the current key points at, if both are present.
    pub fn current_entity<'a>(&self, parent: &'a P) -> Result<Option<&'a M>, Error> {
        let state = self.state(parent)?;

        Ok(state
            .current_entity_key
            .as_ref()
            .and_then(|key| state.entities.get(key)))
    }

    pub fn current_page(&self, parent: &P) -> Result<Option<PageInfo>, Error> {
        Ok(self.state(parent)?.current_page)
    }

    pub fn total_pageable(&self, parent: &P) -> Result<Option<u64>, Error> {
        Ok(self.state(parent)?.total_pageable_count)
    }

    // ── Activity flags ─────────────────────────────────

    pub fn is_loading(&self, parent: &P) -> Result<bool, Error> {
        Ok(self.state(parent)?.is_loading)
    }

    pub fn is_saving(&self, parent: &P) -> Result<bool, Error> {
        Ok(self.state(parent)?.is_saving)
    }

    pub fn is_deleting(&self, parent: &P) -> Result<bool, Error> {
        Ok(self.state(parent)?.is_deleting)
    }
}
