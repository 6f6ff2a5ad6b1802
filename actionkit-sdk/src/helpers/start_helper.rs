use actionkit_common::prelude::*;
use actionkit_common::StartResult;
use serde::Serialize;

use super::{encode_state, ApplyModifier, ResultModifier};

pub struct StartHelper;

impl StartHelper {
    /// Builds the result of starting an action.
    ///
    /// A present `state` is encoded into the result; when encoding fails the
    /// error is returned and no result is built. The modifiers are applied
    /// afterwards, in order.
    pub fn new_start_result<S, I>(state: Option<&S>, modifiers: I) -> KitResult<StartResult>
    where
        S: Serialize + ?Sized,
        I: IntoIterator<Item = ResultModifier>,
    {
        let mut result = StartResult::default();
        if let Some(state) = state {
            result.state = Some(encode_state(state)?);
        }
        result.apply_all(modifiers);

        debug!(
            "Start result built, state entries: {:?}, error: {}",
            result.state.as_ref().map(|s| s.len()),
            result.error.is_some()
        );
        Ok(result)
    }

    /// Same as [`StartHelper::new_start_result`] for actions that keep no state.
    pub fn new_start_result_without_state<I>(modifiers: I) -> KitResult<StartResult>
    where
        I: IntoIterator<Item = ResultModifier>,
    {
        Self::new_start_result(None::<&()>, modifiers)
    }
}

#[cfg(test)]
mod tests {
    use actionkit_common::{ActionKitError, Message, Object};
    use serde::Serialize;

    use super::*;
    use crate::{with_error, with_messages};

    #[derive(Serialize)]
    struct DelayState {
        interface: String,
        delay_ms: i64,
    }

    #[test]
    fn no_state_no_modifiers() {
        let result = StartHelper::new_start_result_without_state([]).expect("build failed");
        assert_eq!(result, StartResult::default());
    }

    #[test]
    fn state_then_modifiers() {
        let state = DelayState {
            interface: "eth0".into(),
            delay_ms: 500,
        };
        let result = StartHelper::new_start_result(
            Some(&state),
            [
                with_messages(vec![Message::new("delay applied")]),
                with_error(ActionKitError::new("partial")),
            ],
        )
        .expect("build failed");

        let action_state = result.state.expect("state missing");
        assert_eq!(action_state.get("interface"), Some(&Object::from("eth0")));
        assert_eq!(action_state.get("delay_ms"), Some(&Object::Int(500)));
        assert_eq!(result.messages, Some(vec![Message::new("delay applied")]));
        assert_eq!(result.error.map(|e| e.title), Some("partial".to_string()));
        assert!(result.artifacts.is_none());
        assert!(result.metrics.is_none());
    }

    #[test]
    fn wraps_conversion_failure() {
        let err = StartHelper::new_start_result(Some("just a string"), []).unwrap_err();
        assert_eq!(err.code(), ErrorCode::state_conversion_failed_code());
        assert_eq!(err.display_text(), "Failed to encode action state");
        assert!(err.cause().is_some());
    }
}
