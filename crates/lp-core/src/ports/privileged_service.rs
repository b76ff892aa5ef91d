//! Privileged-service client port
//!
//! Mediates the elevated-permission broker living outside this process.
//! Results of permission requests are delivered asynchronously to registered
//! listeners, on whatever execution context the client chooses.

use std::sync::Arc;

use crate::ids::ListenerId;
use crate::permission::{RequestCode, ResultCode};

/// Receiver of permission request results.
///
/// Called from a foreign execution context: implementations must be
/// thread-safe and must not block.
pub trait PermissionResultListener: Send + Sync {
    fn on_permission_result(&self, request_code: RequestCode, result_code: ResultCode);
}

pub trait PrivilegedServicePort: Send + Sync {
    /// Whether the transport to the broker currently exists.
    fn is_transport_available(&self) -> bool;

    /// Whether this application currently holds the capability.
    fn is_permission_granted(&self) -> bool;

    /// Protocol version of the running broker, if reachable.
    fn server_version(&self) -> Option<i32>;

    /// Fire-and-forget. The outcome arrives through listeners.
    fn request_permission(&self, request_code: RequestCode);

    fn add_permission_result_listener(
        &self,
        listener: Arc<dyn PermissionResultListener>,
    ) -> ListenerId;

    /// Returns `false` when `id` was not registered.
    fn remove_permission_result_listener(&self, id: &ListenerId) -> bool;
}
