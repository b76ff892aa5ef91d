//! Dependency wiring: config → adapters → home page.

use std::sync::Arc;

use anyhow::Context;
use lp_app::{HomePage, PermissionStatusMonitor};
use lp_core::config::{AppConfig, VersionConfig};
use lp_core::ports::{BuildInfoPort, ClipboardPort, StringsPort};
use lp_platform::build_info::{BuildPropReader, HostBuildInfo};
use lp_platform::clipboard::SystemClipboard;
use lp_platform::privileged::{GrantPolicy, LocalPrivilegedService};
use lp_platform::strings::TomlStringTable;
use tokio::task::JoinHandle;
use tracing::info;

/// Core framework the manager ships with.
const BUNDLED_API_CODE: i32 = 93;
const BUNDLED_CORE_VERSION_NAME: &str = "1.9.2";
const BUNDLED_CORE_VERSION_CODE: i32 = 7024;
const BUNDLED_VERSION_CODE: i32 = 398;

/// Version facts compiled into this binary.
pub fn bundled_version() -> VersionConfig {
    VersionConfig {
        api_code: BUNDLED_API_CODE,
        version_name: env!("CARGO_PKG_VERSION").to_string(),
        version_code: BUNDLED_VERSION_CODE,
        core_version_name: BUNDLED_CORE_VERSION_NAME.to_string(),
        core_version_code: BUNDLED_CORE_VERSION_CODE,
    }
}

/// Adapters that the home page needs besides the broker.
pub struct HomeAdapters {
    pub build_info: Arc<dyn BuildInfoPort>,
    pub clipboard: Arc<dyn ClipboardPort>,
    pub strings: Arc<dyn StringsPort>,
}

impl HomeAdapters {
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let strings: Arc<dyn StringsPort> = if config.strings_path.as_os_str().is_empty() {
            Arc::new(TomlStringTable::builtin())
        } else {
            Arc::new(
                TomlStringTable::with_overrides_from_file(&config.strings_path)
                    .context("Failed to load string table")?,
            )
        };

        let build_info: Arc<dyn BuildInfoPort> = if config.build_prop_path.as_os_str().is_empty()
        {
            Arc::new(HostBuildInfo::new())
        } else {
            Arc::new(BuildPropReader::new(config.build_prop_path.clone()))
        };

        Ok(Self {
            build_info,
            clipboard: Arc::new(SystemClipboard::new()),
            strings,
        })
    }
}

/// A fully wired home page together with the local broker backing it.
pub struct WiredHome {
    pub page: HomePage,
    pub broker: Arc<LocalPrivilegedService>,
    pub broker_worker: JoinHandle<()>,
}

/// Build the home page from configuration. Must run inside a tokio runtime.
pub fn wire_home(config: &AppConfig) -> anyhow::Result<WiredHome> {
    let adapters = HomeAdapters::from_config(config)?;
    wire_home_with(config, adapters)
}

/// Like [`wire_home`], with caller-provided adapters.
pub fn wire_home_with(config: &AppConfig, adapters: HomeAdapters) -> anyhow::Result<WiredHome> {
    let policy: GrantPolicy = config
        .broker
        .policy
        .parse()
        .context("Invalid [broker] policy")?;
    let (broker, broker_worker) = LocalPrivilegedService::spawn(
        policy,
        config.broker.binder_available,
        config.broker.server_version,
    )?;
    let broker = Arc::new(broker);

    let version = if config.version.is_empty() {
        bundled_version()
    } else {
        config.version.clone()
    };

    let monitor = Arc::new(PermissionStatusMonitor::new(broker.clone()));
    let page = HomePage::new(
        monitor,
        version,
        adapters.build_info,
        adapters.clipboard,
        adapters.strings,
    );

    info!(%policy, "Home page wired");
    Ok(WiredHome {
        page,
        broker,
        broker_worker,
    })
}
