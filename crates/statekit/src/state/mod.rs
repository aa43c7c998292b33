
use crate::{error::Error, key::Key, page::PageInfo};
use convert_case::{Case, Casing};
use std::{
    any::Any,
    collections::{BTreeMap, BTreeSet},
    sync::Arc,
};

/// Derives the state-slice field name from a model name.
/// The transform is fixed: camel case (`"Test"` -> `"test"`,
/// `"LineItem"` -> `"lineItem"`).
#[must_use]
pub fn entity_slice_name(model_name: &str) -> String {
    model_name.to_case(Case::Camel)
}

///
/// StateTree
///
/// Host-state seam. The application's parent (and feature) state types
/// expose their slices by name, untyped; the builder's derivation downcasts
/// to the concrete `EntityState`.
///

pub trait StateTree {
    /// The slice stored under `name`, if any.
    fn slice(&self, name: &str) -> Option<&dyn Any>;
}

///
/// EntityStateFn
///
/// Pure derivation from the application state to one entity slice.
/// Built by the state builder; every invocation re-checks slice presence
/// and reports absence through the derivation errors.
///

pub type EntityStateFn<P, M, X = ()> =
    Arc<dyn for<'a> Fn(&'a P) -> Result<&'a EntityState<M, X>, Error> + Send + Sync>;

///
/// EntityState
///
/// One entity's state slice. `ids` defines iteration/display order and need
/// not equal natural key order. Invariant: every id has an entry in
/// `entities` and every entity key appears exactly once in `ids`. The host
/// reducer maintains it; this crate only constructs the initial state.
///

#[derive(Clone, Debug, PartialEq)]
pub struct EntityState<M, X = ()> {
    pub entities: BTreeMap<Key, M>,
    pub ids: Vec<Key>,
    pub current_entity_key: Option<Key>,
    pub current_page: Option<PageInfo>,
    pub total_pageable_count: Option<u64>,
    pub is_loading: bool,
    pub is_saving: bool,
    pub is_deleting: bool,
    pub extra: X,
}

impl<M, X> EntityState<M, X> {
    /// Initial state from a caller seed.
    ///
    /// A present override replaces the empty default wholesale, so seeded
    /// `entities` and `ids` win over the base shape even when they disagree
    /// with each other.
    #[must_use]
    pub fn seeded(seed: InitialSeed<M, X>) -> Self {
        Self {
            entities: seed.entities.unwrap_or_default(),
            ids: seed.ids.unwrap_or_default(),
            current_entity_key: None,
            current_page: None,
            total_pageable_count: None,
            is_loading: false,
            is_saving: false,
            is_deleting: false,
            extra: seed.extra,
        }
    }

    /// Whether `entities` and `ids` describe the same key set, each id
    /// appearing exactly once.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.ids.len() != self.entities.len() {
            return false;
        }

        let mut seen = BTreeSet::new();
        self.ids
            .iter()
            .all(|id| self.entities.contains_key(id) && seen.insert(id))
    }
}

impl<M, X: Default> Default for EntityState<M, X> {
    fn default() -> Self {
        Self::seeded(InitialSeed::default())
    }
}

///
/// InitialSeed
///
/// Caller-supplied additions to the initial state: optional wholesale
/// overrides for `entities`/`ids` plus the extra payload carried alongside
/// the slice.
///

#[derive(Clone, Debug)]
pub struct InitialSeed<M, X = ()> {
    pub entities: Option<BTreeMap<Key, M>>,
    pub ids: Option<Vec<Key>>,
    pub extra: X,
}

impl<M, X> InitialSeed<M, X> {
    #[must_use]
    pub const fn with_extra(extra: X) -> Self {
        Self {
            entities: None,
            ids: None,
            extra,
        }
    }
}

impl<M, X: Default> Default for InitialSeed<M, X> {
    fn default() -> Self {
        Self::with_extra(X::default())
    }
}
