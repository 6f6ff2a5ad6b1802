use actionkit_common::prelude::*;
use actionkit_common::StopResult;

use super::{ApplyModifier, ResultModifier};

pub struct StopHelper;

impl StopHelper {
    /// Builds the result of stopping an action. Stop carries no state and
    /// never fails.
    pub fn new_stop_result<I>(modifiers: I) -> KitResult<StopResult>
    where
        I: IntoIterator<Item = ResultModifier>,
    {
        let mut result = StopResult::default();
        result.apply_all(modifiers);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use actionkit_common::Artifact;

    use super::*;
    use crate::with_artifacts;

    #[test]
    fn collects_artifacts() {
        let result = StopHelper::new_stop_result([with_artifacts(vec![Artifact::from_bytes(
            "k6.log",
            "ok",
        )])])
        .expect("build failed");
        assert_eq!(result.artifacts.map(|a| a[0].label.clone()), Some("k6.log".to_string()));
        assert!(result.messages.is_none());
    }
}
