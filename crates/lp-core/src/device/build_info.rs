//! Static build and device facts shown on the info card.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    pub manufacturer: String,
    pub brand: String,
    pub model: String,
    /// User-visible release name, e.g. `14`
    pub release: String,
    pub sdk_int: i32,
    /// Non-zero only on preview builds
    pub preview_sdk_int: i32,
    pub codename: String,
    /// Most preferred first
    pub supported_abis: Vec<String>,
}

impl BuildInfo {
    /// `"{codename} Preview (API {preview})"` on preview builds, otherwise
    /// `"{release} (API {sdk})"`.
    pub fn system_version(&self) -> String {
        if self.preview_sdk_int != 0 {
            format!(
                "{} Preview (API {})",
                self.codename, self.preview_sdk_int
            )
        } else {
            format!("{} (API {})", self.release, self.sdk_int)
        }
    }

    /// Manufacturer, then brand when it differs from the manufacturer, then
    /// model. Manufacturer and brand get an uppercased first character.
    pub fn device_label(&self) -> String {
        let mut label = capitalize(&self.manufacturer);
        if self.brand != self.manufacturer {
            label.push(' ');
            label.push_str(&capitalize(&self.brand));
        }
        label.push(' ');
        label.push_str(&self.model);
        label
    }

    pub fn primary_abi(&self) -> &str {
        self.supported_abis.first().map(String::as_str).unwrap_or("")
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
