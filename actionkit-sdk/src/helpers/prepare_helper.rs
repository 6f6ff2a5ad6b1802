use actionkit_common::prelude::*;
use actionkit_common::PrepareResult;
use serde::Serialize;

use super::{encode_state, ApplyModifier, ResultModifier};

pub struct PrepareHelper;

impl PrepareHelper {
    /// Builds the result of preparing an action. Prepare always hands a state
    /// to the platform, which passes it back on start, status and stop.
    pub fn new_prepare_result<S, I>(state: &S, modifiers: I) -> KitResult<PrepareResult>
    where
        S: Serialize + ?Sized,
        I: IntoIterator<Item = ResultModifier>,
    {
        let mut result = PrepareResult {
            state: encode_state(state)?,
            ..Default::default()
        };
        result.apply_all(modifiers);

        debug!("Prepare result built, state entries: {}", result.state.len());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use actionkit_common::{Message, MessageLevel, Object};
    use serde::Serialize;

    use super::*;
    use crate::with_messages;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct FillState {
        target_path: String,
        size_mb: u32,
    }

    #[test]
    fn encodes_state() {
        let state = FillState {
            target_path: "/tmp".into(),
            size_mb: 512,
        };
        let result = PrepareHelper::new_prepare_result(
            &state,
            [with_messages(vec![
                Message::new("prepared").with_level(MessageLevel::Debug)
            ])],
        )
        .expect("build failed");
        assert_eq!(result.state.get("targetPath"), Some(&Object::from("/tmp")));
        assert_eq!(result.state.get("sizeMb"), Some(&Object::Int(512)));
        assert_eq!(result.messages.map(|m| m.len()), Some(1));
    }

    #[test]
    fn rejects_non_object_state() {
        let err = PrepareHelper::new_prepare_result(&[1, 2, 3], []).unwrap_err();
        assert_eq!(err.code(), ErrorCode::state_conversion_failed_code());
    }
}
