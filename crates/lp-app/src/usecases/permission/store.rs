use std::sync::atomic::{AtomicBool, Ordering};

use lp_core::permission::{PermissionState, RequestCode, ResultCode, PERMISSION_REQUEST_CODE};
use tokio::sync::watch;
use tracing::{debug, info};

/// Shared permission state.
///
/// Written from the caller's context (`start`) and from the privileged
/// client's callback context. Whole snapshots are replaced through the watch
/// channel, so readers never observe one flag updated without the other.
pub(super) struct PermissionStore {
    state: watch::Sender<PermissionState>,
    request_in_flight: AtomicBool,
}

impl PermissionStore {
    pub(super) fn new() -> Self {
        let (state, _) = watch::channel(PermissionState::default());
        Self {
            state,
            request_in_flight: AtomicBool::new(false),
        }
    }

    pub(super) fn snapshot(&self) -> PermissionState {
        *self.state.borrow()
    }

    pub(super) fn subscribe(&self) -> watch::Receiver<PermissionState> {
        self.state.subscribe()
    }

    pub(super) fn replace(&self, next: PermissionState) {
        self.state.send_if_modified(|current| {
            let changed = *current != next;
            *current = next;
            changed
        });
    }

    /// Apply a permission result. Results for other request codes are ignored.
    pub(super) fn apply_result(&self, request_code: RequestCode, result_code: ResultCode) {
        if request_code != PERMISSION_REQUEST_CODE {
            debug!(%request_code, %result_code, "Ignoring permission result for foreign request code");
            return;
        }

        let granted = result_code.is_granted();
        info!(%result_code, granted, "Permission result received");

        self.state.send_if_modified(|current| {
            let changed = current.permission_granted != granted;
            current.permission_granted = granted;
            changed
        });
        // Published after the state: a reader that sees the request answered
        // also sees its outcome.
        self.request_in_flight.store(false, Ordering::Release);
    }

    /// Marks a request as in flight. Returns `false` if one already was.
    pub(super) fn begin_request(&self) -> bool {
        !self.request_in_flight.swap(true, Ordering::AcqRel)
    }

    pub(super) fn clear_in_flight(&self) {
        self.request_in_flight.store(false, Ordering::Release);
    }

    pub(super) fn is_request_in_flight(&self) -> bool {
        self.request_in_flight.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_nothing_observed() {
        let store = PermissionStore::new();
        assert_eq!(store.snapshot(), PermissionState::default());
        assert!(!store.is_request_in_flight());
    }

    #[test]
    fn matching_result_updates_grant_and_clears_in_flight() {
        let store = PermissionStore::new();
        store.replace(PermissionState::new(true, false));
        assert!(store.begin_request());

        store.apply_result(PERMISSION_REQUEST_CODE, ResultCode::GRANTED);

        assert_eq!(store.snapshot(), PermissionState::new(true, true));
        assert!(!store.is_request_in_flight());
    }

    #[test]
    fn foreign_result_is_ignored() {
        let store = PermissionStore::new();
        store.replace(PermissionState::new(true, false));
        assert!(store.begin_request());

        store.apply_result(RequestCode(1), ResultCode::GRANTED);

        assert_eq!(store.snapshot(), PermissionState::new(true, false));
        assert!(store.is_request_in_flight());
    }

    #[test]
    fn begin_request_rejects_duplicates() {
        let store = PermissionStore::new();
        assert!(store.begin_request());
        assert!(!store.begin_request());
        store.clear_in_flight();
        assert!(store.begin_request());
    }

    #[tokio::test]
    async fn subscribers_see_changes_but_not_redundant_writes() {
        let store = PermissionStore::new();
        let mut rx = store.subscribe();

        store.replace(PermissionState::default());
        assert!(!rx.has_changed().unwrap());

        store.apply_result(PERMISSION_REQUEST_CODE, ResultCode::GRANTED);
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().permission_granted);
    }
}
