use serde::{Deserialize, Serialize};

use super::{ActionKitError, ActionState, Artifacts, Messages, Metrics};

/// Returned by the prepare endpoint of an action. The state is mandatory here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepareResult {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub state: ActionState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Artifacts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ActionKitError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Messages>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
}

/// Returned by the start endpoint of an action.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResult {
    /// Replaces the state stored by prepare, when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ActionState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Artifacts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ActionKitError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Messages>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
}

/// Returned by the status endpoint of an action.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResult {
    /// `true` once the action finished, status will not be polled again.
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ActionState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Artifacts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ActionKitError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Messages>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
}

/// Returned by the stop endpoint of an action.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Artifacts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ActionKitError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Messages>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Message;

    #[test]
    fn empty_start_result_is_empty_object() {
        assert_eq!(
            serde_json::to_value(StartResult::default()).expect("serialize failed"),
            json!({})
        );
    }

    #[test]
    fn prepare_result_always_has_state() {
        assert_eq!(
            serde_json::to_value(PrepareResult::default()).expect("serialize failed"),
            json!({"state": {}})
        );
    }

    #[test]
    fn prepare_result_reads_null_state() {
        let prepare: PrepareResult =
            serde_json::from_value(json!({"state": null})).expect("parse prepare failed");
        assert!(prepare.state.is_empty());
        assert_eq!(prepare.error, None);
    }

    #[test]
    fn status_result_reads_platform_json() {
        let status: StatusResult = serde_json::from_value(json!({
            "completed": true,
            "state": {"pid": 12},
            "messages": [{"message": "stress-ng exited", "level": "info"}]
        }))
        .expect("parse status failed");
        assert!(status.completed);
        assert_eq!(status.state.map(|s| s.len()), Some(1));
        assert_eq!(
            status.messages.as_ref().map(|m| m[0].message.as_str()),
            Some("stress-ng exited")
        );
        assert!(status.error.is_none());
    }

    #[test]
    fn stop_result_messages() {
        let stop = StopResult {
            messages: Some(vec![Message::new("stopped")]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&stop).expect("serialize failed"),
            json!({"messages": [{"message": "stopped"}]})
        );
    }
}
