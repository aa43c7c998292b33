mod memo;


use crate::{
    actions::ActionMap,
    error::Error,
    facade::Facade,
    hydrate::{self, MakeEntityFn},
    registry::{self, EntityOptions},
    selectors::SelectorMap,
    state::{EntityState, EntityStateFn, InitialSeed, StateTree, entity_slice_name},
};
use memo::Memoized;
use serde::de::DeserializeOwned;
use std::{
    any::TypeId,
    collections::BTreeMap,
    fmt,
    sync::{Arc, LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// Store-facing reducer for one slice. `None` means the slice has not been
/// initialized yet and yields the bundle's initial state.
pub type ReducerFn<M, X = ()> =
    Arc<dyn Fn(Option<EntityState<M, X>>) -> EntityState<M, X> + Send + Sync>;

/// Accessor from the root state to a feature state hosted somewhere inside it.
pub type ParentStateFn<P, F> = fn(&P) -> Option<&F>;

// ── Feature affinity ───────────────────────────────────

static FEATURE_AFFINITY: LazyLock<RwLock<BTreeMap<TypeId, String>>> =
    LazyLock::new(|| RwLock::new(BTreeMap::new()));

fn affinity_write() -> RwLockWriteGuard<'static, BTreeMap<TypeId, String>> {
    FEATURE_AFFINITY
        .write()
        .expect("feature affinity RwLock poisoned while acquiring write lock")
}

fn affinity_read() -> RwLockReadGuard<'static, BTreeMap<TypeId, String>> {
    FEATURE_AFFINITY
        .read()
        .expect("feature affinity RwLock poisoned while acquiring read lock")
}

/// The feature a model was last bound to by [`build_feature_state`], if any.
#[must_use]
pub fn feature_affinity<M: 'static>() -> Option<String> {
    affinity_read().get(&TypeId::of::<M>()).cloned()
}

fn record_feature_affinity<M: 'static>(feature: &str) {
    affinity_write().insert(TypeId::of::<M>(), feature.to_string());
}

///
/// StateBundle
///
/// Everything assembled for one model: its action creators, selectors,
/// reducer, entity constructor, and facade. The five products are built on
/// first access and memoized, so assembling a bundle is cheap and repeated
/// reads of a product return the same instance.
///

pub struct StateBundle<P, M, X = ()> {
    model_name: String,
    slice_name: String,
    entity_state: EntityStateFn<P, M, X>,
    initial_state: EntityState<M, X>,
    actions: Memoized<ActionMap<M>>,
    selectors: Memoized<SelectorMap<P, M, X>>,
    reducer: Memoized<ReducerFn<M, X>>,
    make_entity: Memoized<MakeEntityFn<M>>,
    facade: Memoized<Facade<P, M, X>>,
}

impl<P, M: 'static, X: 'static> StateBundle<P, M, X> {
    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Camel-cased property name the slice must be stored under.
    #[must_use]
    pub fn slice_name(&self) -> &str {
        &self.slice_name
    }

    #[must_use]
    pub const fn initial_state(&self) -> &EntityState<M, X> {
        &self.initial_state
    }

    /// The shared deriver that resolves this model's slice from the root
    /// state. Selectors and the facade all go through it.
    #[must_use]
    pub fn entity_state(&self) -> EntityStateFn<P, M, X> {
        Arc::clone(&self.entity_state)
    }

    #[must_use]
    pub fn actions(&self) -> &ActionMap<M> {
        self.actions
            .get_or_build(|| ActionMap::new(self.model_name.clone()))
    }

    #[must_use]
    pub fn selectors(&self) -> &SelectorMap<P, M, X> {
        self.selectors
            .get_or_build(|| SelectorMap::new(Arc::clone(&self.entity_state)))
    }

    #[must_use]
    pub fn reducer(&self) -> &ReducerFn<M, X>
    where
        M: Clone + Send + Sync,
        X: Clone + Send + Sync,
    {
        self.reducer.get_or_build(|| {
            let initial = self.initial_state.clone();

            Arc::new(move |state| state.unwrap_or_else(|| initial.clone()))
        })
    }

    /// Constructor used to hydrate `M` from raw payloads.
    #[must_use]
    pub fn make_entity(&self) -> MakeEntityFn<M>
    where
        M: DeserializeOwned,
    {
        *self.make_entity.get_or_build(hydrate::make_entity::<M>)
    }

    /// Builds the facade on top of the memoized selectors and actions.
    #[must_use]
    pub fn facade(&self) -> &Facade<P, M, X> {
        self.facade
            .get_or_build(|| Facade::new(self.selectors().clone(), self.actions().clone()))
    }
}

impl<P, M, X> fmt::Debug for StateBundle<P, M, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateBundle")
            .field("model_name", &self.model_name)
            .field("slice_name", &self.slice_name)
            .field("actions_built", &self.actions.is_built())
            .field("selectors_built", &self.selectors.is_built())
            .field("reducer_built", &self.reducer.is_built())
            .field("make_entity_built", &self.make_entity.is_built())
            .field("facade_built", &self.facade.is_built())
            .finish_non_exhaustive()
    }
}

// ── Builders ───────────────────────────────────────────

/// Runs the declaration checks in their fixed order. Each failure is
/// reported before it is returned.
fn declared_options<M: 'static>() -> Result<EntityOptions, Error> {
    let options = registry::ensure_entity_declared::<M>()?;
    registry::ensure_key_declared::<M>(&options)?;
    registry::ensure_model_name(&options)?;

    Ok(options)
}

/// Assembles the state bundle for `M` hosted directly on the root state.
///
/// Fails fast when the model was never declared, declares no key fields, or
/// declares an empty model name.
pub fn build_state<P, M>() -> Result<StateBundle<P, M>, Error>
where
    P: StateTree + 'static,
    M: 'static,
{
    build_state_with::<P, M, ()>(InitialSeed::default())
}

/// Same as [`build_state`], seeding the initial slice.
pub fn build_state_with<P, M, X>(seed: InitialSeed<M, X>) -> Result<StateBundle<P, M, X>, Error>
where
    P: StateTree + 'static,
    M: 'static,
    X: 'static,
{
    let options = declared_options::<M>()?;

    let model_name = options.model_name;
    let slice_name = entity_slice_name(&model_name);

    let derive: EntityStateFn<P, M, X> = {
        let model = model_name.clone();
        let slice = slice_name.clone();

        Arc::new(move |parent: &P| {
            parent
                .slice(&slice)
                .and_then(|any| any.downcast_ref::<EntityState<M, X>>())
                .ok_or_else(|| {
                    Error::MissingStateSlice {
                        model: model.clone(),
                        slice: slice.clone(),
                    }
                    .reported()
                })
        })
    };

    Ok(StateBundle {
        model_name,
        slice_name,
        entity_state: derive,
        initial_state: EntityState::seeded(seed),
        actions: Memoized::new(),
        selectors: Memoized::new(),
        reducer: Memoized::new(),
        make_entity: Memoized::new(),
        facade: Memoized::new(),
    })
}

/// Assembles the state bundle for `M` hosted inside a feature state reached
/// through `feature_state`, and records the model's feature affinity.
pub fn build_feature_state<P, F, M>(
    feature_name: impl Into<String>,
    feature_state: ParentStateFn<P, F>,
) -> Result<StateBundle<P, M>, Error>
where
    P: 'static,
    F: StateTree + 'static,
    M: 'static,
{
    build_feature_state_with::<P, F, M, ()>(feature_name, feature_state, InitialSeed::default())
}

/// Same as [`build_feature_state`], seeding the initial slice.
pub fn build_feature_state_with<P, F, M, X>(
    feature_name: impl Into<String>,
    feature_state: ParentStateFn<P, F>,
    seed: InitialSeed<M, X>,
) -> Result<StateBundle<P, M, X>, Error>
where
    P: 'static,
    F: StateTree + 'static,
    M: 'static,
    X: 'static,
{
    let options = declared_options::<M>()?;

    let feature_name = feature_name.into();
    let model_name = options.model_name;
    let slice_name = entity_slice_name(&model_name);

    record_feature_affinity::<M>(&feature_name);

    let derive: EntityStateFn<P, M, X> = {
        let feature = feature_name;
        let model = model_name.clone();
        let slice = slice_name.clone();

        Arc::new(move |parent: &P| {
            let hosted = feature_state(parent).ok_or_else(|| {
                Error::MissingFeatureState {
                    feature: feature.clone(),
                    model: model.clone(),
                    slice: slice.clone(),
                }
                .reported()
            })?;

            hosted
                .slice(&slice)
                .and_then(|any| any.downcast_ref::<EntityState<M, X>>())
                .ok_or_else(|| {
                    Error::MissingEntityState {
                        model: model.clone(),
                        feature: feature.clone(),
                    }
                    .reported()
                })
        })
    };

    Ok(StateBundle {
        model_name,
        slice_name,
        entity_state: derive,
        initial_state: EntityState::seeded(seed),
        actions: Memoized::new(),
        selectors: Memoized::new(),
        reducer: Memoized::new(),
        make_entity: Memoized::new(),
        facade: Memoized::new(),
    })
}
