mod config;
mod helpers;

pub use config::Properties;
pub use helpers::{
    with_artifacts, with_error, with_messages, with_metrics, ApplyModifier, PrepareHelper,
    ResultModifier, StartHelper, StatusHelper, StopHelper,
};
