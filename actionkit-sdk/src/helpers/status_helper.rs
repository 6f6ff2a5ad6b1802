use actionkit_common::prelude::*;
use actionkit_common::StatusResult;
use serde::Serialize;

use super::{encode_state, ApplyModifier, ResultModifier};

pub struct StatusHelper;

impl StatusHelper {
    /// Builds the result of a status poll. A present `state` replaces the one
    /// the platform holds for the action.
    pub fn new_status_result<S, I>(
        completed: bool,
        state: Option<&S>,
        modifiers: I,
    ) -> KitResult<StatusResult>
    where
        S: Serialize + ?Sized,
        I: IntoIterator<Item = ResultModifier>,
    {
        let mut result = StatusResult {
            completed,
            ..Default::default()
        };
        if let Some(state) = state {
            result.state = Some(encode_state(state)?);
        }
        result.apply_all(modifiers);

        debug!(
            "Status result built, completed: {}, error: {}",
            result.completed,
            result.error.is_some()
        );
        Ok(result)
    }

    pub fn new_status_result_without_state<I>(completed: bool, modifiers: I) -> KitResult<StatusResult>
    where
        I: IntoIterator<Item = ResultModifier>,
    {
        Self::new_status_result(completed, None::<&()>, modifiers)
    }
}
