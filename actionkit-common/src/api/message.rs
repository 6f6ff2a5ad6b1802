use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};

use crate::prelude::*;

pub type Messages = Vec<Message>;

/// A log line an action hands back to the platform.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<MessageLevel>,
    /// Used by the platform to pick a log widget, if any.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MessageLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_level(mut self, level: MessageLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

impl From<&str> for Message {
    fn from(message: &str) -> Self {
        Message::new(message)
    }
}

impl From<MessageLevel> for LogLevel {
    fn from(level: MessageLevel) -> Self {
        match level {
            MessageLevel::Debug => LogLevel::Debug,
            MessageLevel::Info => LogLevel::Info,
            MessageLevel::Warn => LogLevel::Warn,
            MessageLevel::Error => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_level_and_fields() {
        let message = Message::new("Starting stress-ng")
            .with_level(MessageLevel::Info)
            .with_field("container", "web-1");
        assert_eq!(
            serde_json::to_value(&message).expect("serialize failed"),
            json!({
                "message": "Starting stress-ng",
                "level": "info",
                "fields": {"container": "web-1"}
            })
        );
    }

    #[test]
    fn parses_level_names() {
        assert_eq!("warn".parse::<MessageLevel>().ok(), Some(MessageLevel::Warn));
        assert_eq!(LogLevel::from(MessageLevel::Error), LogLevel::Error);
    }
}
