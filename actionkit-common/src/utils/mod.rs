mod conversion;
mod env_utils;

pub use conversion::Conversion;
pub use env_utils::{EnvUtils, SystemParameters};
