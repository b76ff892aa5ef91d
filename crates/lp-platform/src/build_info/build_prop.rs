//! Android `build.prop` reader.
//!
//! The file is a flat `key=value` list; `#` starts a comment line. When a key
//! appears more than once the last occurrence wins, as with `getprop`.

use std::collections::HashMap;
use std::path::PathBuf;

use lp_core::device::BuildInfo;
use lp_core::ports::{BuildInfoError, BuildInfoPort};
use tracing::debug;

const MANUFACTURER: &str = "ro.product.manufacturer";
const BRAND: &str = "ro.product.brand";
const MODEL: &str = "ro.product.model";
const RELEASE: &str = "ro.build.version.release";
const SDK: &str = "ro.build.version.sdk";
const PREVIEW_SDK: &str = "ro.build.version.preview_sdk";
const CODENAME: &str = "ro.build.version.codename";
const ABI_LIST: &str = "ro.product.cpu.abilist";
const ABI: &str = "ro.product.cpu.abi";

/// Parsed property map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildProps {
    props: HashMap<String, String>,
}

impl BuildProps {
    pub fn parse(content: &str) -> Self {
        let props = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
            .collect();
        Self { props }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.props.get(key).map(String::as_str)
    }

    fn string(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }

    fn int(&self, key: &str) -> Result<i32, BuildInfoError> {
        match self.get(key) {
            None | Some("") => Ok(0),
            Some(raw) => raw.parse().map_err(|_| BuildInfoError::InvalidValue {
                key: key.to_string(),
                value: raw.to_string(),
            }),
        }
    }

    pub fn to_build_info(&self) -> Result<BuildInfo, BuildInfoError> {
        let supported_abis = match self.get(ABI_LIST).filter(|v| !v.is_empty()) {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|abi| !abi.is_empty())
                .map(str::to_string)
                .collect(),
            None => self.get(ABI).map(|abi| vec![abi.to_string()]).unwrap_or_default(),
        };

        Ok(BuildInfo {
            manufacturer: self.string(MANUFACTURER),
            brand: self.string(BRAND),
            model: self.string(MODEL),
            release: self.string(RELEASE),
            sdk_int: self.int(SDK)?,
            preview_sdk_int: self.int(PREVIEW_SDK)?,
            codename: self.string(CODENAME),
            supported_abis,
        })
    }
}

/// Reads device facts from a `build.prop` file on every call.
pub struct BuildPropReader {
    path: PathBuf,
}

impl BuildPropReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BuildInfoPort for BuildPropReader {
    fn build_info(&self) -> Result<BuildInfo, BuildInfoError> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|source| BuildInfoError::Read {
                path: self.path.clone(),
                source,
            })?;
        let props = BuildProps::parse(&content);
        debug!(path = %self.path.display(), count = props.props.len(), "Parsed build.prop");
        props.to_build_info()
    }
}
