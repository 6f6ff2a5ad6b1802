use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::prelude::*;

/// Structural conversion between arbitrary serde shapes.
///
/// The source is rendered into a json value tree and read back as the target,
/// so fields are matched by name. Missing required fields, type mismatches and
/// sources that cannot be serialized at all are reported as errors.
pub struct Conversion;

impl Conversion {
    pub fn convert<S, T>(source: &S) -> KitResult<T>
    where
        S: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let value = serde_json::to_value(source)?;
        Self::convert_value(value)
    }

    pub fn convert_value<T: DeserializeOwned>(value: serde_json::Value) -> KitResult<T> {
        Ok(serde_json::from_value(value)?)
    }
}
