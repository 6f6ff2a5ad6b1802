use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

pub type Metrics = Vec<Metric>;

/// A single measurement point, labelled by the key/value pairs in `metric`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub metric: BTreeMap<String, String>,
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl Metric {
    pub fn new(name: impl Into<String>, value: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            name: Some(name.into()),
            metric: BTreeMap::new(),
            timestamp,
            value,
        }
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metric.insert(key.into(), value.into());
        self
    }
}
