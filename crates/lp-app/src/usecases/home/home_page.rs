use std::sync::Arc;

use lp_core::config::VersionConfig;
use lp_core::home::HomeView;
use lp_core::ports::{BuildInfoPort, ClipboardPort, StringsPort};
use lp_core::strings::StringKey;
use tracing::{info_span, warn};

use super::{BuildInfoCard, BuildStatusCard, BuildSupportCard, CopyInfoError, CopyInfoToClipboard};
use crate::usecases::permission::{MonitorSession, PermissionStatusMonitor, RequestOutcome};

/// Presenter of the home page.
///
/// Owns the permission monitor for the page; the caller opens a
/// [`MonitorSession`] for as long as the page is visible.
pub struct HomePage {
    monitor: Arc<PermissionStatusMonitor>,
    strings: Arc<dyn StringsPort>,
    status_card: BuildStatusCard,
    info_card: BuildInfoCard,
    support_card: BuildSupportCard,
    copy_info: CopyInfoToClipboard,
}

impl HomePage {
    pub fn new(
        monitor: Arc<PermissionStatusMonitor>,
        version: VersionConfig,
        build_info: Arc<dyn BuildInfoPort>,
        clipboard: Arc<dyn ClipboardPort>,
        strings: Arc<dyn StringsPort>,
    ) -> Self {
        Self {
            status_card: BuildStatusCard::new(monitor.clone(), strings.clone()),
            info_card: BuildInfoCard::new(version, build_info, strings.clone()),
            support_card: BuildSupportCard::new(strings.clone()),
            copy_info: CopyInfoToClipboard::new(clipboard, strings.clone()),
            monitor,
            strings,
        }
    }

    pub fn monitor(&self) -> &PermissionStatusMonitor {
        &self.monitor
    }

    /// Page became visible.
    pub fn open(&self) -> MonitorSession<'_> {
        self.monitor.activate()
    }

    pub fn render(&self) -> HomeView {
        let _span = info_span!("usecase.home_page.render").entered();
        HomeView {
            title: self.strings.lookup(StringKey::AppName),
            status: self.status_card.execute(),
            info: self.info_card.execute(),
            support: self.support_card.execute(),
        }
    }

    /// Clicking the status card (re-)requests the capability.
    pub fn on_status_card_clicked(&self) -> RequestOutcome {
        self.monitor.request_permission()
    }

    /// Copy action of the info card. Returns the confirmation message.
    pub fn copy_info(&self) -> Result<String, CopyInfoError> {
        let card = self.info_card.execute();
        self.copy_info.execute(&card).inspect_err(|err| {
            warn!(error = %err, "Copy info failed");
        })
    }
}
