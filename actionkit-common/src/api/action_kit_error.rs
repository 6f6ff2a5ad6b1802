use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};

use crate::prelude::*;

/// Problem details (RFC 7807 shaped) reported in the `error` field of an action result.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionKitError {
    /// A short, human-readable summary of the problem type.
    pub title: String,
    /// A human-readable explanation specific to this occurrence of the problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// A URI reference that identifies the specific occurrence of the problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ActionKitErrorStatus>,
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

/// How the platform treats an error reported by an action. Both stop the action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ActionKitErrorStatus {
    /// The action detected a failure, e.g. a check it implements did not pass.
    Failed,
    /// A technical error occurred while executing the action.
    Errored,
}

impl ActionKitError {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_status(mut self, status: ActionKitErrorStatus) -> Self {
        self.status = Some(status);
        self
    }
}

impl From<&ErrorCode> for ActionKitError {
    fn from(error: &ErrorCode) -> Self {
        let error_kit = ActionKitError::new(error.display_text())
            .with_status(ActionKitErrorStatus::Errored);
        match error.cause() {
            Some(cause) => error_kit.with_detail(cause.to_string()),
            None => error_kit,
        }
    }
}

impl From<ErrorCode> for ActionKitError {
    fn from(error: ErrorCode) -> Self {
        (&error).into()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn omits_absent_fields() {
        let error = ActionKitError::new("Probe failed").with_status(ActionKitErrorStatus::Failed);
        assert_eq!(
            serde_json::to_value(&error).expect("serialize failed"),
            json!({"title": "Probe failed", "status": "failed"})
        );
    }

    #[test]
    fn from_error_code_carries_cause_as_detail() {
        let cause = std::io::Error::new(std::io::ErrorKind::NotFound, "no such container");
        let error = ErrorCode::StateConversionFailed("Failed to encode action state")
            .with_cause(cause);
        let error_kit = ActionKitError::from(&error);
        assert_eq!(error_kit.title, "Failed to encode action state");
        assert_eq!(error_kit.detail.as_deref(), Some("no such container"));
        assert_eq!(error_kit.status, Some(ActionKitErrorStatus::Errored));
    }

    #[test]
    fn reads_type_field() {
        let error: ActionKitError = serde_json::from_value(json!({
            "title": "Timeout",
            "type": "urn:timeout",
            "status": "errored"
        }))
        .expect("parse error failed");
        assert_eq!(error.r#type.as_deref(), Some("urn:timeout"));
        assert_eq!(error.status, Some(ActionKitErrorStatus::Errored));
        assert_eq!(ActionKitErrorStatus::Errored.as_ref(), "errored");
    }
}
