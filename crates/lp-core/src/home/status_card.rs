use serde::{Deserialize, Serialize};

use crate::permission::{PermissionState, StatusKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusIcon {
    CheckCircle,
    Warning,
}

impl From<StatusKind> for StatusIcon {
    fn from(kind: StatusKind) -> Self {
        match kind {
            StatusKind::Available => StatusIcon::CheckCircle,
            StatusKind::Unavailable => StatusIcon::Warning,
        }
    }
}

/// Privileged helper status card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCard {
    pub state: PermissionState,
    pub icon: StatusIcon,
    pub title: String,
    pub subtitle: String,
    /// Whether clicking the card issues a permission request.
    pub clickable: bool,
}

impl StatusCard {
    pub fn kind(&self) -> StatusKind {
        self.state.status_kind()
    }
}
