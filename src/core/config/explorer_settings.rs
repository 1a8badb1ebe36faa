use serde::{Deserialize, Serialize};

use crate::core::config::compute_settings::ComputeSettings;
use crate::core::config::navigation_settings::NavigationSettings;

/// Everything a settings file can override. Missing sections keep defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerSettings {
    pub compute: ComputeSettings,
    pub navigation: NavigationSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings: ExplorerSettings =
            serde_json::from_str(r#"{ "compute": { "stripe_height": 20 } }"#).unwrap();

        assert_eq!(settings.compute.stripe_height, 20);
        assert_eq!(settings.compute.preview_factor, 4);
        assert_eq!(settings.navigation, NavigationSettings::default());
    }

    #[test]
    fn test_empty_object_is_default() {
        let settings: ExplorerSettings = serde_json::from_str("{}").unwrap();

        assert_eq!(settings, ExplorerSettings::default());
    }
}
