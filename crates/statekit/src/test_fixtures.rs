//! Shared fixtures for unit tests.

use crate::{
    registry::{self, EntityOptions},
    state::{EntityState, StateTree},
};
use serde::{Deserialize, Serialize};
use std::any::Any;

///
/// Test
///
/// The minimal declared entity used across unit tests.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Test {
    pub id: u64,
    pub name: String,
}

impl Test {
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

/// Declares `Test` with its key. Safe to call from concurrent tests;
/// redeclaration writes the same values.
pub fn declare_test_entity() {
    registry::declare_entity::<Test>(EntityOptions::new("Test"));
    registry::declare_keys::<Test>(&["id"]);
}

///
/// AppState
///
/// Root state hosting the `Test` slice under its camel-cased name.
///

#[derive(Default)]
pub struct AppState {
    pub test: EntityState<Test>,
}

impl StateTree for AppState {
    fn slice(&self, name: &str) -> Option<&dyn Any> {
        match name {
            "test" => Some(&self.test),
            _ => None,
        }
    }
}

///
/// ShellState / FeatureState
///
/// Two-level tree for the feature form: the shell owns an optional feature,
/// the feature hosts the slice.
///

#[derive(Default)]
pub struct FeatureState {
    pub test: EntityState<Test>,
}

impl StateTree for FeatureState {
    fn slice(&self, name: &str) -> Option<&dyn Any> {
        match name {
            "test" => Some(&self.test),
            _ => None,
        }
    }
}

#[derive(Default)]
pub struct ShellState {
    pub feature: Option<FeatureState>,
}

pub fn feature_of(shell: &ShellState) -> Option<&FeatureState> {
    shell.feature.as_ref()
}
