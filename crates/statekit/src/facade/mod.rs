
use crate::{
    actions::{Action, ActionMap},
    error::Error,
    key::Key,
    page::{Page, PageInfo},
    selectors::SelectorMap,
    state::EntityState,
};
use std::collections::BTreeMap;

///
/// Facade
///
/// A single handle pairing the read side (selectors) and the write side
/// (action creators) for one model. Dispatch stays with the caller: command
/// methods return the built action.
///

pub struct Facade<P, M, X = ()> {
    selectors: SelectorMap<P, M, X>,
    actions: ActionMap<M>,
}

impl<P, M, X> Clone for Facade<P, M, X> {
    fn clone(&self) -> Self {
        Self {
            selectors: self.selectors.clone(),
            actions: self.actions.clone(),
        }
    }
}

impl<P, M: 'static, X: 'static> Facade<P, M, X> {
    #[must_use]
    pub const fn new(selectors: SelectorMap<P, M, X>, actions: ActionMap<M>) -> Self {
        Self { selectors, actions }
    }

    #[must_use]
    pub const fn selectors(&self) -> &SelectorMap<P, M, X> {
        &self.selectors
    }

    #[must_use]
    pub const fn actions(&self) -> &ActionMap<M> {
        &self.actions
    }

    // ── Reads ──────────────────────────────────────────

    pub fn state<'a>(&self, parent: &'a P) -> Result<&'a EntityState<M, X>, Error> {
        self.selectors.state(parent)
    }

    pub fn all<'a>(&self, parent: &'a P) -> Result<Vec<&'a M>, Error> {
        self.selectors.all(parent)
    }

    pub fn entities<'a>(&self, parent: &'a P) -> Result<&'a BTreeMap<Key, M>, Error> {
        self.selectors.entities(parent)
    }

    pub fn ids<'a>(&self, parent: &'a P) -> Result<&'a [Key], Error> {
        self.selectors.ids(parent)
    }

    pub fn total(&self, parent: &P) -> Result<usize, Error> {
        self.selectors.total(parent)
    }

    pub fn current_key<'a>(&self, parent: &'a P) -> Result<Option<&'a Key>, Error> {
        self.selectors.current_key(parent)
    }

    pub fn current_entity<'a>(&self, parent: &'a P) -> Result<Option<&'a M>, Error> {
        self.selectors.current_entity(parent)
    }

    pub fn current_page(&self, parent: &P) -> Result<Option<PageInfo>, Error> {
        self.selectors.current_page(parent)
    }

    pub fn total_pageable(&self, parent: &P) -> Result<Option<u64>, Error> {
        self.selectors.total_pageable(parent)
    }

    pub fn is_loading(&self, parent: &P) -> Result<bool, Error> {
        self.selectors.is_loading(parent)
    }

    pub fn is_saving(&self, parent: &P) -> Result<bool, Error> {
        self.selectors.is_saving(parent)
    }

    pub fn is_deleting(&self, parent: &P) -> Result<bool, Error> {
        self.selectors.is_deleting(parent)
    }

    // ── Commands ───────────────────────────────────────
    //
    // Success/Failure actions arrive from effects, not from the facade.

    pub fn load(&self, key: Key) -> Action<M> {
        self.actions.load(key)
    }

    pub fn load_all(&self) -> Action<M> {
        self.actions.load_all()
    }

    pub fn load_many(&self, keys: Vec<Key>) -> Action<M> {
        self.actions.load_many(keys)
    }

    pub fn load_page(&self, page: Page) -> Action<M> {
        self.actions.load_page(page)
    }

    pub fn create(&self, entity: M) -> Action<M> {
        self.actions.create(entity)
    }

    pub fn create_many(&self, entities: Vec<M>) -> Action<M> {
        self.actions.create_many(entities)
    }

    pub fn update(&self, entity: M) -> Action<M> {
        self.actions.update(entity)
    }

    pub fn update_many(&self, entities: Vec<M>) -> Action<M> {
        self.actions.update_many(entities)
    }

    pub fn replace(&self, entity: M) -> Action<M> {
        self.actions.replace(entity)
    }

    pub fn upsert(&self, entity: M) -> Action<M> {
        self.actions.upsert(entity)
    }

    pub fn delete(&self, entity: M) -> Action<M> {
        self.actions.delete(entity)
    }

    pub fn delete_many(&self, entities: Vec<M>) -> Action<M> {
        self.actions.delete_many(entities)
    }

    pub fn select(&self, key: Key) -> Action<M> {
        self.actions.select(key)
    }

    pub fn deselect(&self) -> Action<M> {
        self.actions.deselect()
    }

    pub fn clear(&self) -> Action<M> {
        self.actions.clear()
    }
}
