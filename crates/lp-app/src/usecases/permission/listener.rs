use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use lp_core::permission::{RequestCode, ResultCode};
use lp_core::ports::PermissionResultListener;
use tracing::debug;

use super::store::PermissionStore;

/// Listener registered for one monitor activation.
///
/// Deactivated before it is removed from the client, so a result the client
/// delivers after `stop()` can no longer touch the state.
pub(super) struct ActivationListener {
    store: Arc<PermissionStore>,
    active: AtomicBool,
}

impl ActivationListener {
    pub(super) fn new(store: Arc<PermissionStore>) -> Self {
        Self {
            store,
            active: AtomicBool::new(true),
        }
    }

    pub(super) fn deactivate(&self) {
        self.active.store(false, Ordering::Release);
    }
}

impl PermissionResultListener for ActivationListener {
    fn on_permission_result(&self, request_code: RequestCode, result_code: ResultCode) {
        if !self.active.load(Ordering::Acquire) {
            debug!(%request_code, "Dropping permission result delivered after stop");
            return;
        }
        self.store.apply_result(request_code, result_code);
    }
}
