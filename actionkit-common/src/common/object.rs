use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::prelude::{fmt_err, InlineStr, KitResult};

/// Dynamically typed value held inside an action state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Object {
    Int(i32),
    Long(i64),
    Double(f64),
    Boolean(bool),
    String(InlineStr),
    Map(HashMap<InlineStr, Object>),
    List(Vec<Object>),
    Null,
}

impl Object {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> KitResult<bool> {
        match self {
            Self::Boolean(v) => Ok(*v),
            _ => fmt_err!(IllegalArgument, "not a bool {:?}", self),
        }
    }

    pub fn as_string(&self) -> KitResult<&InlineStr> {
        match self {
            Self::String(v) => Ok(v),
            _ => fmt_err!(IllegalArgument, "not a string {:?}", self),
        }
    }

    pub fn as_i64(&self) -> KitResult<i64> {
        match self {
            Self::Int(v) => Ok(*v as i64),
            Self::Long(v) => Ok(*v),
            _ => fmt_err!(IllegalArgument, "not an integer {:?}", self),
        }
    }

    pub fn as_f64(&self) -> KitResult<f64> {
        match self {
            Self::Int(v) => Ok(*v as f64),
            Self::Long(v) => Ok(*v as f64),
            Self::Double(v) => Ok(*v),
            _ => fmt_err!(IllegalArgument, "not a number {:?}", self),
        }
    }

    pub fn as_map(&self) -> KitResult<&HashMap<InlineStr, Object>> {
        match self {
            Self::Map(v) => Ok(v),
            _ => fmt_err!(IllegalArgument, "not a map {:?}", self),
        }
    }

    pub fn estimate_map_memory_used(hashmap: &HashMap<InlineStr, Object>) -> usize {
        hashmap
            .iter()
            .map(|(k, v)| k.as_bytes().len() + v.estimate_memory_used())
            .sum()
    }

    pub fn estimate_memory_used(&self) -> usize {
        match self {
            Object::Int(_) => 4,
            Object::Long(_) | Object::Double(_) => 8,
            Object::Boolean(_) => 1,
            Object::String(v) => v.as_bytes().len(),
            Object::Map(v) => Self::estimate_map_memory_used(v),
            Object::List(v) => v.iter().map(Object::estimate_memory_used).sum(),
            Object::Null => 1,
        }
    }
}

/// json <-> object
impl Object {
    fn convert_hashmap_to_json(hash_map: &HashMap<InlineStr, Object>) -> serde_json::Value {
        let mut map = serde_json::Map::with_capacity(hash_map.len());
        for (k, v) in hash_map {
            map.insert(k.to_string(), v.to_json());
        }
        serde_json::Value::Object(map)
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Object::Int(v) => serde_json::Value::Number((*v).into()),
            Object::Long(v) => serde_json::Value::Number((*v).into()),
            // NaN and infinities have no json form
            Object::Double(v) => serde_json::Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Object::Boolean(v) => serde_json::Value::Bool(*v),
            Object::String(v) => serde_json::Value::String(v.to_string()),
            Object::Map(v) => Self::convert_hashmap_to_json(v),
            Object::List(v) => serde_json::Value::Array(v.iter().map(Object::to_json).collect()),
            Object::Null => serde_json::Value::Null,
        }
    }

    pub fn convert_jsonmap_to_hashmap(
        jsonmap: &serde_json::Map<String, serde_json::Value>,
    ) -> HashMap<InlineStr, Object> {
        let mut map = HashMap::with_capacity(jsonmap.len());
        for (k, v) in jsonmap {
            map.insert(k.into(), Self::from_json(v));
        }
        map
    }

    pub fn from_json(json: &serde_json::Value) -> Object {
        match json {
            serde_json::Value::Bool(v) => (*v).into(),
            serde_json::Value::Number(v) => {
                if let Some(v) = v.as_i64() {
                    if let Ok(v) = i32::try_from(v) {
                        Object::Int(v)
                    } else {
                        Object::Long(v)
                    }
                } else {
                    // u64 above i64::MAX falls through to f64 as well
                    Object::Double(v.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(v) => v.into(),
            serde_json::Value::Object(v) => Object::Map(Self::convert_jsonmap_to_hashmap(v)),
            serde_json::Value::Array(v) => Object::List(v.iter().map(Self::from_json).collect()),
            serde_json::Value::Null => Object::Null,
        }
    }
}

impl From<i32> for Object {
    fn from(value: i32) -> Self {
        Object::Int(value)
    }
}
impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::Long(value)
    }
}
impl From<f64> for Object {
    fn from(value: f64) -> Self {
        Object::Double(value)
    }
}
impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Object::Boolean(value)
    }
}
impl From<InlineStr> for Object {
    fn from(value: InlineStr) -> Self {
        Object::String(value)
    }
}
impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Object::String(InlineStr::from(value))
    }
}
impl From<&String> for Object {
    fn from(value: &String) -> Self {
        Object::String(InlineStr::from(value.as_str()))
    }
}
impl From<String> for Object {
    fn from(value: String) -> Self {
        Object::String(InlineStr::from(value))
    }
}
impl From<Vec<Object>> for Object {
    fn from(value: Vec<Object>) -> Self {
        Object::List(value)
    }
}
impl From<HashMap<InlineStr, Object>> for Object {
    fn from(value: HashMap<InlineStr, Object>) -> Self {
        Object::Map(value)
    }
}
