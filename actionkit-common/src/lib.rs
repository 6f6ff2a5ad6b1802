mod api;
mod common;
mod exception;
mod utils;

pub use api::{
    ActionKitError, ActionKitErrorStatus, ActionState, Artifact, Artifacts, Message,
    MessageLevel, Messages, Metric, Metrics, PrepareResult, StartResult, StatusResult,
    StopResult,
};
pub use common::Object;
pub use utils::{Conversion, EnvUtils, SystemParameters};

pub mod prelude;

#[macro_use]
pub(crate) mod macros;
