use std::sync::Arc;

use lp_core::home::{StatusCard, StatusIcon};
use lp_core::ports::StringsPort;
use lp_core::strings::StringKey;

use crate::usecases::permission::PermissionStatusMonitor;

/// Builds the privileged helper status card from the monitor's snapshot.
pub struct BuildStatusCard {
    monitor: Arc<PermissionStatusMonitor>,
    strings: Arc<dyn StringsPort>,
}

impl BuildStatusCard {
    pub fn new(monitor: Arc<PermissionStatusMonitor>, strings: Arc<dyn StringsPort>) -> Self {
        Self { monitor, strings }
    }

    pub fn execute(&self) -> StatusCard {
        let state = self.monitor.current_state();
        let icon = StatusIcon::from(state.status_kind());

        let (title, subtitle) = if state.permission_granted {
            let version = self
                .monitor
                .server_version()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "?".to_string());
            (
                self.strings.lookup(StringKey::ShizukuAvailable),
                format!("API {version}"),
            )
        } else {
            (
                self.strings.lookup(StringKey::ShizukuUnavailable),
                self.strings.lookup(StringKey::HomeShizukuWarning),
            )
        };

        StatusCard {
            state,
            icon,
            title,
            subtitle,
            clickable: state.can_request() && !self.monitor.is_request_in_flight(),
        }
    }
}
