use serde::{Deserialize, Serialize};

/// Version facts of the manager and the bundled core framework.
///
/// Read once per render, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionConfig {
    pub api_code: i32,
    pub version_name: String,
    pub version_code: i32,
    pub core_version_name: String,
    pub core_version_code: i32,
}

impl VersionConfig {
    /// Read the `[version]` table. Absent keys become empty values.
    pub fn from_toml(toml_value: &toml::Value) -> Self {
        let section = toml_value.get("version");
        let string = |key: &str| {
            section
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let int = |key: &str| {
            section
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
                .and_then(|v| i32::try_from(v).ok())
                .unwrap_or(0)
        };

        Self {
            api_code: int("api_code"),
            version_name: string("version_name"),
            version_code: int("version_code"),
            core_version_name: string("core_version_name"),
            core_version_code: int("core_version_code"),
        }
    }

    /// True when no version fact was provided at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// `"{version_name} ({version_code})"`
    pub fn manager_version_label(&self) -> String {
        format!("{} ({})", self.version_name, self.version_code)
    }

    /// `"{core_version_name} ({core_version_code})"`
    pub fn framework_version_label(&self) -> String {
        format!("{} ({})", self.core_version_name, self.core_version_code)
    }
}
