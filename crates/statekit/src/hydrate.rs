use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error as ThisError;

///
/// HydrateError
///

#[derive(Debug, ThisError)]
pub enum HydrateError {
    #[error("payload does not fit the model shape: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Constructor function for one model type.
pub type MakeEntityFn<M> = fn(Value) -> Result<M, HydrateError>;

/// Returns the constructor for `M`. Construction is pure: equal payloads
/// hydrate equal entities, and every call returns the same function item.
pub fn make_entity<M>() -> MakeEntityFn<M>
where
    M: DeserializeOwned,
{
    hydrate::<M>
}

fn hydrate<M>(payload: Value) -> Result<M, HydrateError>
where
    M: DeserializeOwned,
{
    Ok(serde_json::from_value(payload)?)
}
