//! StateKit derives Redux-style entity state management from declared
//! models: action creators, selectors, reducers, entity constructors, and
//! facades, assembled into one bundle per model.
//!
//! ## Crate layout
//! - `registry`: model declarations and the fail-fast declaration checks.
//! - `key`: entity keys with a total order across key kinds.
//! - `state`: entity slices, initial seeds, and the state-tree access trait.
//! - `actions`: the action taxonomy and per-model action creators.
//! - `selectors`: read-side accessors over a derived slice.
//! - `hydrate`: entity constructors for raw payloads.
//! - `facade`: the combined read/write handle for one model.
//! - `builder`: `build_state` and the feature form, producing a `StateBundle`.
#![warn(unreachable_pub)]

pub mod actions;
pub mod builder;
pub mod error;
pub mod facade;
pub mod hydrate;
pub mod key;
pub mod page;
pub mod registry;
pub mod selectors;
pub mod state;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;
#[cfg(test)]
pub(crate) mod test_support;

pub use error::Error;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or internal helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        actions::{Action, ActionKind, ActionMap, ActionPayload},
        builder::{
            ParentStateFn, ReducerFn, StateBundle, build_feature_state,
            build_feature_state_with, build_state, build_state_with, feature_affinity,
        },
        facade::Facade,
        hydrate::{MakeEntityFn, make_entity},
        key::Key,
        page::{Page, PageInfo},
        registry::{EntityOptions, KeyMetadata, declare_entity, declare_keys},
        selectors::SelectorMap,
        state::{EntityState, EntityStateFn, InitialSeed, StateTree, entity_slice_name},
    };
}
