//! Serializable theme configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::resolve::Metrics;

/// Theme overrides as written in a configuration file.
///
/// Both sections are optional. Palette keys are design-token keys and values
/// are `#RRGGBB` strings:
///
/// ```yaml
/// palette:
///   productNormal: "#00A991"
///   productNormalActive: "#008F7B"
/// metrics:
///   corner_radius: 8.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub palette: BTreeMap<String, String>,
    pub metrics: Metrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let config: ThemeConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.palette.is_empty());
        assert_eq!(config.metrics, Metrics::ORBIT);
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let result: Result<ThemeConfig, _> = serde_yaml::from_str("colours: {}");
        assert!(result.is_err());
    }

    #[test]
    fn test_json_config() {
        let config: ThemeConfig =
            serde_json::from_str(r##"{ "palette": { "inkDark": "#000000" } }"##).unwrap();
        assert_eq!(config.palette.get("inkDark").map(String::as_str), Some("#000000"));
    }
}
