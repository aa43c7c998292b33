#[cfg(test)]
mod tests;

use crate::error::Error;
use std::{
    any::TypeId,
    collections::BTreeMap,
    sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

///
/// EntityOptions
///
/// Declared entity options. The model name namespaces generated action tags
/// and derives the slice name. Emptiness is checked at read time, not at
/// construction time, so a bad declaration surfaces when state is built.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntityOptions {
    pub model_name: String,
}

impl EntityOptions {
    #[must_use]
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
        }
    }
}

///
/// KeyMetadata
///
/// Ordered key-field names (composite keys keep declaration order) plus the
/// per-field is-key lookup. Both sides are populated together by
/// `declare_keys`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyMetadata {
    names: Vec<&'static str>,
    lookup: BTreeMap<&'static str, bool>,
}

impl KeyMetadata {
    fn new(names: &[&'static str]) -> Self {
        let lookup = names.iter().map(|name| (*name, true)).collect();

        Self {
            names: names.to_vec(),
            lookup,
        }
    }

    /// Key-field names in declaration order.
    #[must_use]
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    #[must_use]
    pub fn is_key(&self, field: &str) -> bool {
        self.lookup.get(field).copied().unwrap_or(false)
    }
}

///
/// Registry
/// the static model-metadata structure, keyed by type identity
///

#[derive(Debug, Default)]
struct Registry {
    options: BTreeMap<TypeId, EntityOptions>,
    keys: BTreeMap<TypeId, KeyMetadata>,
}

static REGISTRY: LazyLock<RwLock<Registry>> =
    LazyLock::new(|| RwLock::new(Registry::default()));

fn registry_write() -> RwLockWriteGuard<'static, Registry> {
    REGISTRY
        .write()
        .expect("registry RwLock poisoned while acquiring write lock")
}

fn registry_read() -> RwLockReadGuard<'static, Registry> {
    REGISTRY
        .read()
        .expect("registry RwLock poisoned while acquiring read lock")
}

// ── Registration ───────────────────────────────────────────

/// Declare a model type as an entity. Re-declaration overwrites.
pub fn declare_entity<M: 'static>(opts: EntityOptions) {
    registry_write().options.insert(TypeId::of::<M>(), opts);
}

/// Declare the model's key fields, in key order. Re-declaration overwrites.
pub fn declare_keys<M: 'static>(names: &[&'static str]) {
    registry_write()
        .keys
        .insert(TypeId::of::<M>(), KeyMetadata::new(names));
}

// ── Readers ────────────────────────────────────────────────

/// Declared entity options for the model type.
#[must_use]
pub fn entity_options<M: 'static>() -> Option<EntityOptions> {
    registry_read().options.get(&TypeId::of::<M>()).cloned()
}

/// Declared key metadata for the model type.
#[must_use]
pub fn key_metadata<M: 'static>() -> Option<KeyMetadata> {
    registry_read().keys.get(&TypeId::of::<M>()).cloned()
}

/// Ordered key-field names declared for the model type.
#[must_use]
pub fn key_names<M: 'static>() -> Option<Vec<&'static str>> {
    registry_read()
        .keys
        .get(&TypeId::of::<M>())
        .map(|meta| meta.names.clone())
}

/// Per-field is-key lookup declared for the model type.
#[must_use]
pub fn key_map<M: 'static>() -> Option<BTreeMap<&'static str, bool>> {
    registry_read()
        .keys
        .get(&TypeId::of::<M>())
        .map(|meta| meta.lookup.clone())
}

// ── Declaration checks ─────────────────────────────────────
//
// Each check passes silently or reports once and returns the error.
// The builder runs them in order: entity, key, model name.

/// Entity check: options registered for the type.
pub(crate) fn ensure_entity_declared<M: 'static>() -> Result<EntityOptions, Error> {
    entity_options::<M>().ok_or_else(|| Error::MissingEntityDeclaration.reported())
}

/// Key check: key metadata registered and non-empty.
/// Runs after the entity check, so the report can name the model.
pub(crate) fn ensure_key_declared<M: 'static>(opts: &EntityOptions) -> Result<(), Error> {
    let declared = registry_read()
        .keys
        .get(&TypeId::of::<M>())
        .is_some_and(|meta| !meta.names.is_empty());

    if declared {
        Ok(())
    } else {
        Err(Error::MissingKeyDeclaration {
            model: opts.model_name.clone(),
        }
        .reported())
    }
}

/// Model-name check: declared options carry a non-empty name.
pub(crate) fn ensure_model_name(opts: &EntityOptions) -> Result<(), Error> {
    if opts.model_name.is_empty() {
        Err(Error::MissingModelName.reported())
    } else {
        Ok(())
    }
}
