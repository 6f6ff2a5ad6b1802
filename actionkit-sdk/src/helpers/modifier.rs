use actionkit_common::{
    ActionKitError, Artifacts, Messages, Metrics, PrepareResult, StartResult, StatusResult,
    StopResult,
};

/// Sets one optional field of an action result. Applied in order, so a later
/// modifier for the same field wins.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultModifier {
    Artifacts(Option<Artifacts>),
    Error(Option<ActionKitError>),
    Messages(Option<Messages>),
    Metrics(Option<Metrics>),
}

pub fn with_artifacts(artifacts: impl Into<Option<Artifacts>>) -> ResultModifier {
    ResultModifier::Artifacts(artifacts.into())
}

pub fn with_error(error: impl Into<Option<ActionKitError>>) -> ResultModifier {
    ResultModifier::Error(error.into())
}

pub fn with_messages(messages: impl Into<Option<Messages>>) -> ResultModifier {
    ResultModifier::Messages(messages.into())
}

pub fn with_metrics(metrics: impl Into<Option<Metrics>>) -> ResultModifier {
    ResultModifier::Metrics(metrics.into())
}

pub trait ApplyModifier {
    fn apply(&mut self, modifier: ResultModifier);

    fn apply_all<I>(&mut self, modifiers: I)
    where
        I: IntoIterator<Item = ResultModifier>,
    {
        for modifier in modifiers {
            self.apply(modifier);
        }
    }
}

macro_rules! impl_apply_modifier {
    ($($result:ty),*$(,)*) => {
        $(
        impl ApplyModifier for $result {
            fn apply(&mut self, modifier: ResultModifier) {
                match modifier {
                    ResultModifier::Artifacts(artifacts) => self.artifacts = artifacts,
                    ResultModifier::Error(error) => self.error = error,
                    ResultModifier::Messages(messages) => self.messages = messages,
                    ResultModifier::Metrics(metrics) => self.metrics = metrics,
                }
            }
        }
        )*
    };
}

impl_apply_modifier! {
    PrepareResult,
    StartResult,
    StatusResult,
    StopResult,
}
