use std::path::PathBuf;

use super::VersionConfig;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Version facts shown on the info card
    pub version: VersionConfig,

    /// Optional string table overriding the built-in display strings
    /// (path info only, no existence check)
    pub strings_path: PathBuf,

    /// Android `build.prop` file describing the device (may be empty)
    pub build_prop_path: PathBuf,

    /// Process-local privileged broker settings
    pub broker: BrokerConfig,
}

/// Settings of the process-local privileged broker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrokerConfig {
    /// Raw policy name (`grant`, `deny`, `manual`); interpreted by the platform layer
    pub policy: String,

    /// Whether the broker transport is reachable
    pub binder_available: bool,

    /// Version reported by the broker (0 when unknown)
    pub server_version: i32,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            version: VersionConfig::from_toml(toml_value),
            strings_path: PathBuf::from(str_at("strings", "path")),
            build_prop_path: PathBuf::from(str_at("device", "build_prop_path")),
            broker: BrokerConfig {
                policy: str_at("broker", "policy"),
                binder_available: toml_value
                    .get("broker")
                    .and_then(|b| b.get("binder_available"))
                    .and_then(|v| v.as_bool())
                    .unwrap_or(false),
                server_version: toml_value
                    .get("broker")
                    .and_then(|b| b.get("server_version"))
                    .and_then(|v| v.as_integer())
                    .and_then(|v| i32::try_from(v).ok())
                    .unwrap_or(0),
            },
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            version: VersionConfig::default(),
            strings_path: PathBuf::new(),
            build_prop_path: PathBuf::new(),
            broker: BrokerConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_parses_all_sections() {
        let toml_str = r#"
            [version]
            api_code = 93
            version_name = "0.6"

            [strings]
            path = "/etc/lp/strings.toml"

            [device]
            build_prop_path = "/system/build.prop"

            [broker]
            policy = "manual"
            binder_available = true
            server_version = 13
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.version.api_code, 93);
        assert_eq!(config.version.version_name, "0.6");
        assert_eq!(config.strings_path, PathBuf::from("/etc/lp/strings.toml"));
        assert_eq!(config.build_prop_path, PathBuf::from("/system/build.prop"));
        assert_eq!(config.broker.policy, "manual");
        assert!(config.broker.binder_available);
        assert_eq!(config.broker.server_version, 13);
    }

    #[test]
    fn test_from_toml_out_of_range_integers_are_empty() {
        let toml_str = r#"
            [version]
            api_code = 4294967389

            [broker]
            server_version = -4294967283
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.version.api_code, 0);
        assert_eq!(config.broker.server_version, 0);
    }

    #[test]
    fn test_from_toml_returns_empty_values_when_missing() {
        let toml_value: Value = toml::from_str("").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert!(config.version.is_empty());
        assert_eq!(config.strings_path, PathBuf::new());
        assert_eq!(config.build_prop_path, PathBuf::new());
        assert_eq!(config.broker, BrokerConfig::default());
    }

    #[test]
    fn test_empty_creates_valid_dto() {
        let config = AppConfig::empty();

        assert!(config.version.is_empty());
        assert_eq!(config.broker.policy, "");
        assert!(!config.broker.binder_available);
    }
}
