use std::env;

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

use crate::prelude::*;

pub struct EnvUtils;

impl EnvUtils {
    pub fn is_system_parameter(test: &str) -> bool {
        SystemParameters::iter().any(|c| c.as_ref().eq(test))
    }

    pub fn get_system_parameter_value(sys_param: SystemParameters) -> Option<InlineStr> {
        env::var(sys_param.as_ref()).ok().map(Into::into)
    }

    /// Reads `sys_param` and parses it, ignoring unset or malformed values.
    pub fn parse_system_parameter<T: std::str::FromStr>(sys_param: SystemParameters) -> Option<T> {
        let raw = Self::get_system_parameter_value(sys_param)?;
        match raw.trim().parse() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(
                    "ignoring malformed value {:?} for {}",
                    raw,
                    sys_param.as_ref()
                );
                None
            }
        }
    }
}

#[derive(Clone, Copy, Debug, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemParameters {
    ActionkitMaxActionStateSizeKb,
}
