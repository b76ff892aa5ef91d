use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lp_core::ids::ListenerId;
use lp_core::permission::{PermissionState, RequestCode, ResultCode, PERMISSION_REQUEST_CODE};
use lp_core::ports::PrivilegedServicePort;
use tokio::sync::watch;
use tracing::{debug, info, info_span};

use super::listener::ActivationListener;
use super::session::MonitorSession;
use super::store::PermissionStore;

/// What a call to [`PermissionStatusMonitor::request_permission`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// A request was sent to the privileged service.
    Issued,
    /// The monitor is not started; nobody would observe the result.
    NotStarted,
    /// The transport to the privileged service is down.
    TransportUnavailable,
    AlreadyGranted,
    /// A previous request has not been answered yet.
    InFlight,
}

struct Registration {
    id: ListenerId,
    listener: Arc<ActivationListener>,
}

/// Live view of whether the privileged helper grants this application its
/// capability.
///
/// ## Behavior
/// - `start()` registers a result listener and reads the current transport
///   and grant status, so the state is usable before any callback arrives.
/// - `stop()` detaches the listener. Calling it when not started is a no-op.
/// - `request_permission()` only reaches the service while the transport is
///   up, the capability is missing and no earlier request is unanswered.
/// - Results may arrive on any thread; readers always see a whole snapshot.
///
/// Prefer [`PermissionStatusMonitor::activate`], which pairs `start()` with
/// `stop()` on every exit path.
pub struct PermissionStatusMonitor {
    service: Arc<dyn PrivilegedServicePort>,
    store: Arc<PermissionStore>,
    registration: Mutex<Option<Registration>>,
}

impl PermissionStatusMonitor {
    pub fn new(service: Arc<dyn PrivilegedServicePort>) -> Self {
        Self {
            service,
            store: Arc::new(PermissionStore::new()),
            registration: Mutex::new(None),
        }
    }

    /// Start observing and return a guard that stops on drop.
    pub fn activate(&self) -> MonitorSession<'_> {
        let owns_registration = self.start();
        MonitorSession::new(self, owns_registration)
    }

    /// Register the result listener and initialize the state.
    ///
    /// Returns `false` if the monitor was already started; the existing
    /// registration is kept so start/stop stay paired.
    pub fn start(&self) -> bool {
        let _span = info_span!("usecase.permission_monitor.start").entered();
        let mut registration = self.lock_registration();

        if registration.is_some() {
            debug!("Permission monitor already started");
            return false;
        }

        let listener = Arc::new(ActivationListener::new(self.store.clone()));
        let id = self
            .service
            .add_permission_result_listener(listener.clone());

        let binder_available = self.service.is_transport_available();
        let permission_granted = binder_available && self.service.is_permission_granted();
        self.store
            .replace(PermissionState::new(binder_available, permission_granted));

        info!(
            listener_id = %id,
            binder_available,
            permission_granted,
            "Permission monitor started"
        );
        *registration = Some(Registration { id, listener });
        true
    }

    /// Detach the listener registered by `start()`.
    pub fn stop(&self) {
        let _span = info_span!("usecase.permission_monitor.stop").entered();
        let Some(Registration { id, listener }) = self.lock_registration().take() else {
            debug!("Permission monitor not started, nothing to stop");
            return;
        };

        listener.deactivate();
        if !self.service.remove_permission_result_listener(&id) {
            debug!(listener_id = %id, "Listener was already gone from the privileged service");
        }
        self.store.clear_in_flight();
        info!(listener_id = %id, "Permission monitor stopped");
    }

    pub fn is_started(&self) -> bool {
        self.lock_registration().is_some()
    }

    /// Ask the privileged service for the capability.
    ///
    /// Never fails; when a precondition does not hold the call is a no-op and
    /// the returned outcome says why.
    pub fn request_permission(&self) -> RequestOutcome {
        let _span = info_span!("usecase.permission_monitor.request_permission").entered();

        if !self.is_started() {
            debug!("Permission request ignored: monitor not started");
            return RequestOutcome::NotStarted;
        }

        let state = self.store.snapshot();
        if !state.binder_available {
            debug!("Permission request ignored: transport unavailable");
            return RequestOutcome::TransportUnavailable;
        }
        if state.permission_granted {
            debug!("Permission request ignored: already granted");
            return RequestOutcome::AlreadyGranted;
        }
        if !self.store.begin_request() {
            debug!("Permission request ignored: previous request still in flight");
            return RequestOutcome::InFlight;
        }

        info!(request_code = %PERMISSION_REQUEST_CODE, "Requesting privileged permission");
        self.service.request_permission(PERMISSION_REQUEST_CODE);
        RequestOutcome::Issued
    }

    /// Apply a permission result. Only results for the monitor's request
    /// code change the state.
    pub fn on_permission_result(&self, request_code: RequestCode, result_code: ResultCode) {
        self.store.apply_result(request_code, result_code);
    }

    pub fn current_state(&self) -> PermissionState {
        self.store.snapshot()
    }

    /// Receiver notified whenever the state changes.
    pub fn subscribe(&self) -> watch::Receiver<PermissionState> {
        self.store.subscribe()
    }

    pub fn is_request_in_flight(&self) -> bool {
        self.store.is_request_in_flight()
    }

    /// Protocol version of the privileged service, if reachable.
    pub fn server_version(&self) -> Option<i32> {
        self.service.server_version()
    }

    fn lock_registration(&self) -> MutexGuard<'_, Option<Registration>> {
        self.registration
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for PermissionStatusMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lp_core::ports::PermissionResultListener;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// In-memory privileged service with invocation counters.
    #[derive(Default)]
    struct FakeService {
        available: AtomicBool,
        granted: AtomicBool,
        requests: AtomicUsize,
        listeners: Mutex<HashMap<ListenerId, Arc<dyn PermissionResultListener>>>,
    }

    impl FakeService {
        fn with(available: bool, granted: bool) -> Arc<Self> {
            let service = Self::default();
            service.available.store(available, Ordering::SeqCst);
            service.granted.store(granted, Ordering::SeqCst);
            Arc::new(service)
        }

        fn listener_count(&self) -> usize {
            self.listeners.lock().unwrap().len()
        }

        fn deliver(&self, request_code: RequestCode, result_code: ResultCode) {
            let listeners: Vec<_> = self.listeners.lock().unwrap().values().cloned().collect();
            for listener in listeners {
                listener.on_permission_result(request_code, result_code);
            }
        }
    }

    impl PrivilegedServicePort for FakeService {
        fn is_transport_available(&self) -> bool {
            self.available.load(Ordering::SeqCst)
        }

        fn is_permission_granted(&self) -> bool {
            self.granted.load(Ordering::SeqCst)
        }

        fn server_version(&self) -> Option<i32> {
            self.is_transport_available().then_some(13)
        }

        fn request_permission(&self, _request_code: RequestCode) {
            self.requests.fetch_add(1, Ordering::SeqCst);
        }

        fn add_permission_result_listener(
            &self,
            listener: Arc<dyn PermissionResultListener>,
        ) -> ListenerId {
            let id = ListenerId::new();
            self.listeners.lock().unwrap().insert(id.clone(), listener);
            id
        }

        fn remove_permission_result_listener(&self, id: &ListenerId) -> bool {
            self.listeners.lock().unwrap().remove(id).is_some()
        }
    }

    #[test]
    fn start_reads_initial_state() {
        let service = FakeService::with(true, true);
        let monitor = PermissionStatusMonitor::new(service.clone());

        assert!(monitor.start());

        assert_eq!(monitor.current_state(), PermissionState::new(true, true));
        assert_eq!(service.listener_count(), 1);
    }

    #[test]
    fn grant_query_is_skipped_without_transport() {
        let service = FakeService::with(false, true);
        let monitor = PermissionStatusMonitor::new(service);

        monitor.start();

        assert_eq!(monitor.current_state(), PermissionState::default());
    }

    #[test]
    fn second_start_keeps_single_registration() {
        let service = FakeService::with(true, false);
        let monitor = PermissionStatusMonitor::new(service.clone());

        assert!(monitor.start());
        assert!(!monitor.start());
        assert_eq!(service.listener_count(), 1);

        monitor.stop();
        assert_eq!(service.listener_count(), 0);
    }

    #[test]
    fn stop_without_start_is_noop() {
        let service = FakeService::with(true, false);
        let monitor = PermissionStatusMonitor::new(service.clone());

        monitor.stop();
        monitor.stop();

        assert_eq!(service.listener_count(), 0);
        assert!(!monitor.is_started());
    }

    #[test]
    fn request_before_start_is_noop() {
        let service = FakeService::with(true, false);
        let monitor = PermissionStatusMonitor::new(service.clone());

        assert_eq!(monitor.request_permission(), RequestOutcome::NotStarted);
        assert_eq!(service.requests.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn duplicate_request_is_ignored_until_answered() {
        let service = FakeService::with(true, false);
        let monitor = PermissionStatusMonitor::new(service.clone());
        monitor.start();

        assert_eq!(monitor.request_permission(), RequestOutcome::Issued);
        assert_eq!(monitor.request_permission(), RequestOutcome::InFlight);
        assert_eq!(service.requests.load(Ordering::SeqCst), 1);

        service.deliver(PERMISSION_REQUEST_CODE, ResultCode::DENIED);

        assert_eq!(monitor.request_permission(), RequestOutcome::Issued);
        assert_eq!(service.requests.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn stop_clears_unanswered_request() {
        let service = FakeService::with(true, false);
        let monitor = PermissionStatusMonitor::new(service.clone());
        monitor.start();
        monitor.request_permission();
        assert!(monitor.is_request_in_flight());

        monitor.stop();
        assert!(!monitor.is_request_in_flight());

        monitor.start();
        assert_eq!(monitor.request_permission(), RequestOutcome::Issued);
    }

    #[test]
    fn drop_detaches_listener() {
        let service = FakeService::with(true, false);
        {
            let monitor = PermissionStatusMonitor::new(service.clone());
            monitor.start();
            assert_eq!(service.listener_count(), 1);
        }
        assert_eq!(service.listener_count(), 0);
    }

    #[test]
    fn server_version_comes_from_service() {
        let monitor = PermissionStatusMonitor::new(FakeService::with(true, false));
        assert_eq!(monitor.server_version(), Some(13));
    }
}
