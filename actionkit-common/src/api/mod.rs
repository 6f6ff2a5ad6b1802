mod action_kit_error;
mod action_state;
mod artifact;
mod message;
mod metric;
mod results;

pub use action_kit_error::{ActionKitError, ActionKitErrorStatus};
pub use action_state::ActionState;
pub use artifact::{Artifact, Artifacts};
pub use message::{Message, MessageLevel, Messages};
pub use metric::{Metric, Metrics};
pub use results::{PrepareResult, StartResult, StatusResult, StopResult};

use serde::{Deserialize, Deserializer};

/// Reads an explicit json `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
