//! Process-local privileged broker.
//!
//! Stands in for the external elevated-permission service when the manager
//! runs outside Android. It keeps the listener registry, answers requests by
//! [`GrantPolicy`] and delivers results from a tokio worker task, so
//! listeners always run on a different context than the requester.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lp_core::ids::ListenerId;
use lp_core::permission::{RequestCode, ResultCode};
use lp_core::ports::{PermissionResultListener, PrivilegedServicePort};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::GrantPolicy;

type ListenerRegistry = Arc<Mutex<HashMap<ListenerId, Arc<dyn PermissionResultListener>>>>;

#[derive(Debug, thiserror::Error)]
pub enum BrokerError {
    #[error("local broker requires a running tokio runtime")]
    NoRuntime,
}

#[derive(Debug, Clone, Copy)]
struct PermissionResult {
    request_code: RequestCode,
    result_code: ResultCode,
}

pub struct LocalPrivilegedService {
    binder_available: bool,
    granted: AtomicBool,
    server_version: i32,
    policy: GrantPolicy,
    listeners: ListenerRegistry,
    pending: Mutex<Vec<RequestCode>>,
    results: mpsc::UnboundedSender<PermissionResult>,
}

impl LocalPrivilegedService {
    /// Create the broker and spawn its delivery worker on the current runtime.
    ///
    /// The worker ends once the broker is dropped.
    pub fn spawn(
        policy: GrantPolicy,
        binder_available: bool,
        server_version: i32,
    ) -> Result<(Self, JoinHandle<()>), BrokerError> {
        let handle = tokio::runtime::Handle::try_current().map_err(|_| BrokerError::NoRuntime)?;
        let listeners: ListenerRegistry = Arc::new(Mutex::new(HashMap::new()));
        let (results, rx) = mpsc::unbounded_channel();

        let worker = handle.spawn(deliver_results(listeners.clone(), rx));

        info!(%policy, binder_available, server_version, "Local privileged broker started");
        Ok((
            Self {
                binder_available,
                granted: AtomicBool::new(false),
                server_version,
                policy,
                listeners,
                pending: Mutex::new(Vec::new()),
                results,
            },
            worker,
        ))
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).len()
    }

    pub fn pending_count(&self) -> usize {
        lock(&self.pending).len()
    }

    /// Answer every request held by the `Manual` policy. Returns how many
    /// requests were answered.
    pub fn resolve_pending(&self, granted: bool) -> usize {
        let pending: Vec<RequestCode> = lock(&self.pending).drain(..).collect();
        for request_code in &pending {
            self.answer(*request_code, granted);
        }
        pending.len()
    }

    fn answer(&self, request_code: RequestCode, granted: bool) {
        if granted {
            self.granted.store(true, Ordering::SeqCst);
        }
        let result = PermissionResult {
            request_code,
            result_code: ResultCode::from_granted(granted),
        };
        if self.results.send(result).is_err() {
            warn!(%request_code, "Broker delivery worker has stopped, dropping result");
        }
    }
}

impl PrivilegedServicePort for LocalPrivilegedService {
    fn is_transport_available(&self) -> bool {
        self.binder_available
    }

    fn is_permission_granted(&self) -> bool {
        self.is_transport_available() && self.granted.load(Ordering::SeqCst)
    }

    fn server_version(&self) -> Option<i32> {
        self.is_transport_available().then_some(self.server_version)
    }

    fn request_permission(&self, request_code: RequestCode) {
        if !self.is_transport_available() {
            warn!(%request_code, "Permission requested while broker transport is down");
            return;
        }

        debug!(%request_code, policy = %self.policy, "Broker received permission request");
        match self.policy {
            GrantPolicy::Grant => self.answer(request_code, true),
            GrantPolicy::Deny => self.answer(request_code, false),
            GrantPolicy::Manual => lock(&self.pending).push(request_code),
        }
    }

    fn add_permission_result_listener(
        &self,
        listener: Arc<dyn PermissionResultListener>,
    ) -> ListenerId {
        let id = ListenerId::new();
        lock(&self.listeners).insert(id.clone(), listener);
        debug!(listener_id = %id, "Permission result listener added");
        id
    }

    fn remove_permission_result_listener(&self, id: &ListenerId) -> bool {
        let removed = lock(&self.listeners).remove(id).is_some();
        debug!(listener_id = %id, removed, "Permission result listener removed");
        removed
    }
}

async fn deliver_results(
    listeners: ListenerRegistry,
    mut rx: mpsc::UnboundedReceiver<PermissionResult>,
) {
    while let Some(result) = rx.recv().await {
        // Snapshot so listeners may (un)register from inside the callback.
        let targets: Vec<_> = lock(&listeners).values().cloned().collect();
        debug!(
            request_code = %result.request_code,
            result_code = %result.result_code,
            listeners = targets.len(),
            "Delivering permission result"
        );
        for listener in targets {
            listener.on_permission_result(result.request_code, result.result_code);
        }
    }
    debug!("Broker delivery worker finished");
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
