use serde::{Deserialize, Serialize};

/// Display status derived from a [`PermissionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusKind {
    Available,
    Unavailable,
}

/// Snapshot of the privileged helper status as seen by this application.
///
/// `Default` is the "nothing observed yet" state: both flags `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionState {
    /// Whether the transport to the privileged service is reachable.
    pub binder_available: bool,
    /// Whether this application currently holds the privileged capability.
    pub permission_granted: bool,
}

impl PermissionState {
    pub fn new(binder_available: bool, permission_granted: bool) -> Self {
        Self {
            binder_available,
            permission_granted,
        }
    }

    /// Binder availability does not affect the displayed status, only whether
    /// a request may be initiated.
    pub fn status_kind(&self) -> StatusKind {
        if self.permission_granted {
            StatusKind::Available
        } else {
            StatusKind::Unavailable
        }
    }

    /// A permission request is only meaningful while the transport is up and
    /// the capability is not yet held.
    pub fn can_request(&self) -> bool {
        self.binder_available && !self.permission_granted
    }
}
