#[rustfmt::skip]
pub use crate::exception::{ErrorCode, KitResult};
pub use crate::fmt_err;

#[rustfmt::skip]
// std
pub use std::collections::{BTreeMap, HashMap};

#[rustfmt::skip]
pub type InlineStr = smartstring::SmartString<smartstring::Compact>;
pub use once_cell::sync::Lazy;

#[rustfmt::skip]
pub use log::{debug, error, info, log_enabled, trace, warn, Level as LogLevel};

#[rustfmt::skip]
pub use crate::common::Object;
