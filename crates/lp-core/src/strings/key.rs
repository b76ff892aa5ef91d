use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Keys of the display strings used by the home page.
///
/// The resource name (`as_str`) is the key used in string table files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StringKey {
    AppName,
    ShizukuAvailable,
    ShizukuUnavailable,
    HomeShizukuWarning,
    HomeApiVersion,
    HomeLspatchVersion,
    HomeFrameworkVersion,
    HomeSystemVersion,
    HomeDevice,
    HomeSystemAbi,
    HomeInfoCopied,
    Copy,
    HomeSupport,
    HomeDescription,
    HomeViewSourceCode,
}

impl StringKey {
    pub const ALL: [StringKey; 15] = [
        StringKey::AppName,
        StringKey::ShizukuAvailable,
        StringKey::ShizukuUnavailable,
        StringKey::HomeShizukuWarning,
        StringKey::HomeApiVersion,
        StringKey::HomeLspatchVersion,
        StringKey::HomeFrameworkVersion,
        StringKey::HomeSystemVersion,
        StringKey::HomeDevice,
        StringKey::HomeSystemAbi,
        StringKey::HomeInfoCopied,
        StringKey::Copy,
        StringKey::HomeSupport,
        StringKey::HomeDescription,
        StringKey::HomeViewSourceCode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StringKey::AppName => "app_name",
            StringKey::ShizukuAvailable => "shizuku_available",
            StringKey::ShizukuUnavailable => "shizuku_unavailable",
            StringKey::HomeShizukuWarning => "home_shizuku_warning",
            StringKey::HomeApiVersion => "home_api_version",
            StringKey::HomeLspatchVersion => "home_lspatch_version",
            StringKey::HomeFrameworkVersion => "home_framework_version",
            StringKey::HomeSystemVersion => "home_system_version",
            StringKey::HomeDevice => "home_device",
            StringKey::HomeSystemAbi => "home_system_abi",
            StringKey::HomeInfoCopied => "home_info_copied",
            StringKey::Copy => "copy",
            StringKey::HomeSupport => "home_support",
            StringKey::HomeDescription => "home_description",
            StringKey::HomeViewSourceCode => "home_view_source_code",
        }
    }
}

impl Display for StringKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StringKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StringKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_parses_back_from_its_name() {
        for key in StringKey::ALL {
            assert_eq!(key.as_str().parse::<StringKey>(), Ok(key));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!("home_nothing".parse::<StringKey>().is_err());
    }
}
