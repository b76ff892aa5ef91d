use std::sync::Arc;

use lp_core::config::VersionConfig;
use lp_core::home::{InfoCard, InfoEntry};
use lp_core::ports::{BuildInfoPort, StringsPort};
use lp_core::strings::StringKey;
use tracing::warn;

/// Builds the version and device info card.
///
/// A build info source that cannot be read degrades to empty values; the
/// card is informational and never fails to render.
pub struct BuildInfoCard {
    version: VersionConfig,
    build_info: Arc<dyn BuildInfoPort>,
    strings: Arc<dyn StringsPort>,
}

impl BuildInfoCard {
    pub fn new(
        version: VersionConfig,
        build_info: Arc<dyn BuildInfoPort>,
        strings: Arc<dyn StringsPort>,
    ) -> Self {
        Self {
            version,
            build_info,
            strings,
        }
    }

    pub fn execute(&self) -> InfoCard {
        let build = self.build_info.build_info().unwrap_or_else(|err| {
            warn!(error = %err, "Build info unavailable, showing empty device facts");
            Default::default()
        });
        let label = |key| self.strings.lookup(key);

        InfoCard {
            entries: vec![
                InfoEntry::new(
                    label(StringKey::HomeApiVersion),
                    self.version.api_code.to_string(),
                ),
                InfoEntry::new(
                    label(StringKey::HomeLspatchVersion),
                    self.version.manager_version_label(),
                ),
                InfoEntry::new(
                    label(StringKey::HomeFrameworkVersion),
                    self.version.framework_version_label(),
                ),
                InfoEntry::new(label(StringKey::HomeSystemVersion), build.system_version()),
                InfoEntry::new(label(StringKey::HomeDevice), build.device_label()),
                InfoEntry::new(label(StringKey::HomeSystemAbi), build.primary_abi()),
            ],
            copy_label: label(StringKey::Copy),
        }
    }
}
