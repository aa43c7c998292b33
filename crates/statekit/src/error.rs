use thiserror::Error as ThisError;
use tracing::error;

///
/// Stable messages for the three declaration checks.
/// Exported because downstream tooling and tests match on the exact text.
///

pub const NO_ENTITY_DECLARATION_MSG: &str = "Specified model is not declared as an entity. All automatic entities must declare entity options with a model name specified. Building of state aborted!";

pub const NO_ENTITY_KEY_MSG: &str = "Specified model has no declared key fields. All automatic entities must have at least one field identified as the entity key. Building of state aborted!";

pub const NO_MODEL_NAME_MSG: &str = "Specified model is declared as an entity but does not specify a model name, which is required for proper production execution. Building of state aborted!";

///
/// Error
///
/// Declaration and derivation failures. All are fatal at the raise site:
/// no partial bundle is returned and no retry is attempted. The caller
/// fixes the model declaration or the state-tree shape and rebuilds.
/// Display is the stable contract message; the logged report appends a
/// worked example where the kind has one.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error("{NO_ENTITY_DECLARATION_MSG}")]
    MissingEntityDeclaration,

    #[error("{NO_ENTITY_KEY_MSG}")]
    MissingKeyDeclaration { model: String },

    #[error("{NO_MODEL_NAME_MSG}")]
    MissingModelName,

    #[error(
        "State for model {model} could not be found! Make sure you add your entity state to the parent state with a property named exactly '{slice}'."
    )]
    MissingStateSlice { model: String, slice: String },

    #[error(
        "Could not retrieve feature state {feature} for model {model}! Make sure you add your entity state to the feature state with a property named exactly '{slice}'."
    )]
    MissingFeatureState {
        feature: String,
        model: String,
        slice: String,
    },

    #[error("State for model {model} in feature {feature} could not be found!")]
    MissingEntityState { model: String, feature: String },
}

impl Error {
    /// Worked example appended to the logged report.
    /// `MissingEntityState` reports without one.
    #[must_use]
    pub fn worked_example(&self) -> Option<String> {
        match self {
            Self::MissingEntityDeclaration | Self::MissingModelName => {
                Some(declaration_example("Test"))
            }

            Self::MissingKeyDeclaration { model } => Some(declaration_example(model)),

            Self::MissingStateSlice { model, slice } => {
                Some(state_example("app", "AppState", slice, model))
            }

            Self::MissingFeatureState { model, slice, .. } => {
                Some(state_example("feature", "FeatureState", slice, model))
            }

            Self::MissingEntityState { .. } => None,
        }
    }

    /// Log the failure once with the operator-visible prefix, then hand the
    /// error back for propagation.
    pub(crate) fn reported(self) -> Self {
        let example = self.worked_example().unwrap_or_default();
        error!(target: "statekit", "! {self}{example}");

        self
    }
}

fn declaration_example(model: &str) -> String {
    format!(
        " Example model with proper declaration:\n\n\
         declare_entity::<{model}>(EntityOptions::new(\"{model}\"));\n\
         declare_keys::<{model}>(&[\"id\"]);"
    )
}

fn state_example(scope: &str, parent: &str, slice: &str, model: &str) -> String {
    format!(
        " Example {scope} state:\n\n\
         pub struct {parent} {{\n\
         \x20   // ... other state ...\n\
         \x20   {slice}: EntityState<{model}>,\n\
         \x20   // ... other state ...\n\
         }}"
    )
}
