mod modifier;
mod prepare_helper;
mod start_helper;
mod status_helper;
mod stop_helper;

use actionkit_common::prelude::*;
use actionkit_common::ActionState;
pub use modifier::{
    with_artifacts, with_error, with_messages, with_metrics, ApplyModifier, ResultModifier,
};
pub use prepare_helper::PrepareHelper;
use serde::Serialize;
pub use start_helper::StartHelper;
pub use status_helper::StatusHelper;
pub use stop_helper::StopHelper;

use crate::Properties;

const ENCODE_STATE_FAILED: &str = "Failed to encode action state";

/// Converts the caller's state into an `ActionState`, wrapping any failure.
fn encode_state<S: Serialize + ?Sized>(state: &S) -> KitResult<ActionState> {
    let action_state = ActionState::from_state(state).map_err(|e| {
        warn!("{}: {}", ENCODE_STATE_FAILED, e.message());
        ErrorCode::StateConversionFailed(ENCODE_STATE_FAILED).with_cause(e)
    })?;

    let threshold = Properties::get_max_action_state_size_threshold();
    let size = action_state.estimate_memory_used();
    if exceeds_state_size_threshold(size, threshold) {
        warn!(
            "Action state of {} bytes exceeds the configured threshold of {} KB",
            size, threshold
        );
    }
    Ok(action_state)
}

/// The threshold is in KB; huge configured values saturate instead of overflowing.
fn exceeds_state_size_threshold(size: usize, threshold_kb: usize) -> bool {
    size > threshold_kb.saturating_mul(1024)
}
