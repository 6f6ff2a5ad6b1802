use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::prelude::*;
use crate::Conversion;

/// Opaque bookkeeping of an action, carried between lifecycle calls by the platform.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionState(HashMap<InlineStr, Object>);

impl ActionState {
    /// Maps the fields of an arbitrary `state` onto an action state.
    ///
    /// `state` must serialize to a json object (a struct or a string keyed
    /// map). A state serializing to `null` yields an empty action state, so
    /// it is written as `{}` on the wire rather than `null`.
    pub fn from_state<S: Serialize + ?Sized>(state: &S) -> KitResult<Self> {
        let value = serde_json::to_value(state)?;
        match value {
            serde_json::Value::Null => Ok(Self::default()),
            serde_json::Value::Object(map) => Ok(Self(Object::convert_jsonmap_to_hashmap(&map))),
            other => fmt_err!(
                IllegalArgument,
                "action state must be an object, got {}",
                json_kind(&other)
            ),
        }
    }

    /// Reads the state back into the shape the action stored it with.
    pub fn decode<T: DeserializeOwned>(&self) -> KitResult<T> {
        Conversion::convert(self).map_err(|e| {
            ErrorCode::StateDecodeFailed("Failed to decode action state").with_cause(e)
        })
    }

    pub fn get(&self, key: &str) -> Option<&Object> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<InlineStr>, value: impl Into<Object>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&InlineStr, &Object)> {
        self.0.iter()
    }

    /// Rough payload size in bytes.
    pub fn estimate_memory_used(&self) -> usize {
        Object::estimate_map_memory_used(&self.0)
    }
}

impl From<HashMap<InlineStr, Object>> for ActionState {
    fn from(map: HashMap<InlineStr, Object>) -> Self {
        Self(map)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a bool",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
