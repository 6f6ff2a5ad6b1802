use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

pub type Artifacts = Vec<Artifact>;

/// A file produced by an action, uploaded to the platform with the result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub label: String,
    /// base64 encoded content
    pub data: String,
}

impl Artifact {
    pub fn from_bytes(label: impl Into<String>, bytes: impl AsRef<[u8]>) -> Self {
        Self {
            label: label.into(),
            data: STANDARD.encode(bytes),
        }
    }

    pub fn decoded_data(&self) -> KitResult<Vec<u8>> {
        STANDARD.decode(&self.data).or_else(|e| {
            fmt_err!(
                IllegalArgument,
                "artifact {} is not valid base64: {}",
                self.label,
                e
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_content() {
        let artifact = Artifact::from_bytes("stress.log", "done\n");
        assert_eq!(artifact.data, "ZG9uZQo=");
        assert_eq!(artifact.decoded_data().expect("decode failed"), b"done\n");
    }

    #[test]
    fn rejects_garbage() {
        let artifact = Artifact {
            label: "broken".into(),
            data: "%%%".into(),
        };
        assert!(artifact.decoded_data().is_err());
    }
}
