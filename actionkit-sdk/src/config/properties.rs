use actionkit_common::prelude::*;
use actionkit_common::{EnvUtils, SystemParameters};

static PROPERTIES: Lazy<Properties> = Lazy::new(Properties::from_env);

pub struct Properties {
    /// The threshold of the action state payload size in KB beyond which a warning is logged
    /// when the state is encoded. The platform stores the state with every execution step.
    /// KILOBYTES
    max_action_state_size_threshold: usize,
}

impl Properties {
    pub fn get_max_action_state_size_threshold() -> usize {
        PROPERTIES.max_action_state_size_threshold
    }

    fn from_env() -> Self {
        let mut properties = Properties::default();
        if let Some(threshold) =
            EnvUtils::parse_system_parameter(SystemParameters::ActionkitMaxActionStateSizeKb)
        {
            properties.max_action_state_size_threshold = threshold;
        }
        properties
    }
}

impl Default for Properties {
    fn default() -> Self {
        Self {
            max_action_state_size_threshold: 256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(Properties::default().max_action_state_size_threshold, 256);
        assert!(Properties::get_max_action_state_size_threshold() > 0);
    }

    // All env mutations for this parameter live in this one test.
    #[test]
    fn threshold_from_env() {
        let key = SystemParameters::ActionkitMaxActionStateSizeKb.as_ref();

        std::env::set_var(key, "not-a-number");
        assert_eq!(Properties::from_env().max_action_state_size_threshold, 256);

        std::env::set_var(key, " 512 ");
        assert_eq!(Properties::from_env().max_action_state_size_threshold, 512);

        std::env::set_var(key, usize::MAX.to_string());
        assert_eq!(
            Properties::from_env().max_action_state_size_threshold,
            usize::MAX
        );

        std::env::remove_var(key);
        assert_eq!(Properties::from_env().max_action_state_size_threshold, 256);
    }
}
