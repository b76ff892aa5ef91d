use std::ops::Deref;

use super::monitor::PermissionStatusMonitor;

/// Scoped activation of a [`PermissionStatusMonitor`].
///
/// Created by [`PermissionStatusMonitor::activate`]. Dropping the session
/// stops the monitor, whether the scope ends normally, returns early or
/// unwinds. A session opened while the monitor was already started does not
/// own the registration and leaves it alone on drop.
#[must_use = "dropping the session stops the monitor immediately"]
pub struct MonitorSession<'a> {
    monitor: &'a PermissionStatusMonitor,
    owns_registration: bool,
}

impl<'a> MonitorSession<'a> {
    pub(super) fn new(monitor: &'a PermissionStatusMonitor, owns_registration: bool) -> Self {
        Self {
            monitor,
            owns_registration,
        }
    }

    pub fn owns_registration(&self) -> bool {
        self.owns_registration
    }
}

impl Deref for MonitorSession<'_> {
    type Target = PermissionStatusMonitor;

    fn deref(&self) -> &Self::Target {
        self.monitor
    }
}

impl Drop for MonitorSession<'_> {
    fn drop(&mut self) {
        if self.owns_registration {
            self.monitor.stop();
        }
    }
}
