//! # Configuration Loader
//!
//! ## Responsibilities
//!
//! - ✅ Read TOML configuration files
//! - ✅ Parse TOML into AppConfig DTO
//! - ✅ Report I/O and parsing errors with context
//!
//! ## Prohibited
//!
//! ❌ **No validation logic**
//! ❌ **No business rules**

use std::path::{Path, PathBuf};

use anyhow::Context;
use lp_core::config::AppConfig;
use tracing::{debug, info};

/// Load configuration from a TOML file
///
/// **NO validation is performed**: empty strings and missing sections are
/// accepted as facts.
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Resolve and load the effective configuration.
///
/// An explicitly requested file must exist. The default file is optional:
/// when it is absent the empty configuration is used.
pub fn load_effective_config(
    explicit: Option<&Path>,
    default_path: Option<PathBuf>,
) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        info!(path = %path.display(), "Loading config");
        return load_config(path);
    }

    match default_path {
        Some(path) if path.exists() => {
            info!(path = %path.display(), "Loading config");
            load_config(&path)
        }
        Some(path) => {
            debug!(path = %path.display(), "No config file, using empty config");
            Ok(AppConfig::empty())
        }
        None => {
            debug!("No config directory, using empty config");
            Ok(AppConfig::empty())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_load_config_reads_valid_toml() {
        let file = write_config(
            r#"
            [version]
            api_code = 93
            version_name = "0.6"
            version_code = 398

            [device]
            build_prop_path = "/system/build.prop"

            [broker]
            policy = "deny"
            binder_available = true
        "#,
        );

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.version.api_code, 93);
        assert_eq!(config.version.manager_version_label(), "0.6 (398)");
        assert_eq!(config.build_prop_path, PathBuf::from("/system/build.prop"));
        assert_eq!(config.broker.policy, "deny");
        assert!(config.broker.binder_available);
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let file = write_config("[version\napi_code = ");

        let err = load_config(file.path()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_load_config_returns_io_error_on_file_not_found() {
        let err = load_config(Path::new("/this/path/does/not/exist/config.toml")).unwrap_err();

        assert!(
            err.to_string().contains("Failed to read config file"),
            "Expected IO error message, got: {err}"
        );
    }

    #[test]
    fn test_missing_default_file_yields_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            load_effective_config(None, Some(dir.path().join("config.toml"))).unwrap();

        assert!(config.version.is_empty());
        assert!(!config.broker.binder_available);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        assert!(load_effective_config(Some(&missing), None).is_err());
    }

    #[test]
    fn test_explicit_file_wins_over_default() {
        let explicit = write_config("[broker]\npolicy = \"manual\"\n");
        let default = write_config("[broker]\npolicy = \"deny\"\n");

        let config = load_effective_config(
            Some(explicit.path()),
            Some(default.path().to_path_buf()),
        )
        .unwrap();

        assert_eq!(config.broker.policy, "manual");
    }
}
