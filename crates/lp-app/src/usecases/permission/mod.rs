//! Permission status monitoring for the privileged helper service.

mod listener;
mod monitor;
mod session;
mod store;

pub use monitor::{PermissionStatusMonitor, RequestOutcome};
pub use session::MonitorSession;
