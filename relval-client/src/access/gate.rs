use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use log::{debug, info, warn};
use parking_lot::Mutex;
use relval_model::Role;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::errors::IdentityError;
use super::state::IdentityState;
use super::types::UserInfo;
use crate::config::ClientConfig;
use crate::infra::api_client::ApiClient;
use crate::infra::services::IdentityService;

/// One-shot identity fetch plus a synchronous role predicate.
///
/// The fetch runs as a task owned by the gate. Dropping the gate (or calling
/// [`AccessRoleGate::deactivate`]) aborts it, and a result that still races
/// past the abort is discarded instead of being committed.
#[derive(Debug)]
pub struct AccessRoleGate {
    service: Arc<dyn IdentityService>,
    sender: Arc<watch::Sender<IdentityState>>,
    receiver: watch::Receiver<IdentityState>,
    alive: Arc<AtomicBool>,
    activated: AtomicBool,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl AccessRoleGate {
    pub fn new(service: Arc<dyn IdentityService>) -> Self {
        let (sender, receiver) = watch::channel(IdentityState::Pending);
        Self {
            service,
            sender: Arc::new(sender),
            receiver,
            alive: Arc::new(AtomicBool::new(true)),
            activated: AtomicBool::new(false),
            task: Mutex::new(None),
        }
    }

    /// Gate backed by the HTTP identity endpoint from `config`.
    pub fn from_config(config: &ClientConfig) -> anyhow::Result<Self> {
        let client = ApiClient::new(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Issue the identity fetch.
    ///
    /// Only the first call does anything; it returns `Ok(true)` when it
    /// started the fetch and `Ok(false)` on every later call. Must run inside
    /// a Tokio runtime.
    pub fn activate(&self) -> Result<bool, IdentityError> {
        if self.activated.swap(true, Ordering::AcqRel) {
            debug!("[AccessRoleGate] Already activated, not fetching again");
            return Ok(false);
        }

        let Ok(runtime) = Handle::try_current() else {
            self.activated.store(false, Ordering::Release);
            return Err(IdentityError::NoRuntime);
        };

        let service = Arc::clone(&self.service);
        let sender = Arc::downgrade(&self.sender);
        let alive = Arc::clone(&self.alive);

        let task = runtime.spawn(async move {
            let result = service.fetch_user_info().await;
            match &result {
                Ok(info) => info!(
                    "[AccessRoleGate] Fetched user info (role_index={})",
                    info.role_index
                ),
                Err(err) => warn!("[AccessRoleGate] Identity fetch failed: {}", err),
            }
            commit(&alive, &sender, IdentityState::from(result));
        });

        *self.task.lock() = Some(task);
        Ok(true)
    }

    /// Stop the fetch if it is still running. Nothing is committed afterwards.
    pub fn deactivate(&self) {
        self.alive.store(false, Ordering::Release);
        if let Some(task) = self.task.lock().take() {
            task.abort();
        }
    }

    /// Whether the current user holds at least the named role.
    ///
    /// Known names are `user`, `manager` and `administrator`. Any other name
    /// answers `false`, as does every name before the identity resolves.
    pub fn role(&self, role_name: &str) -> bool {
        match role_name.parse::<Role>() {
            Ok(role) => self.has_role(role),
            Err(err) => {
                debug!("[AccessRoleGate] {}", err);
                false
            }
        }
    }

    /// Whether the current user holds at least `role`.
    pub fn has_role(&self, role: Role) -> bool {
        self.receiver
            .borrow()
            .user_info()
            .is_some_and(|info| info.has_role(role))
    }

    /// Cached identity, `None` until the fetch succeeds.
    pub fn user_info(&self) -> Option<UserInfo> {
        self.receiver.borrow().user_info().cloned()
    }

    pub fn state(&self) -> IdentityState {
        self.receiver.borrow().clone()
    }

    /// Subscribe to the single `Pending` -> `Resolved`/`Failed` change.
    pub fn subscribe(&self) -> watch::Receiver<IdentityState> {
        self.receiver.clone()
    }

    /// Wait until the fetch has finished one way or the other.
    ///
    /// Never completes if the gate is not activated.
    pub async fn resolved(&self) -> IdentityState {
        let mut receiver = self.receiver.clone();
        match receiver.wait_for(|state| !state.is_pending()).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        }
    }
}

impl Drop for AccessRoleGate {
    fn drop(&mut self) {
        self.deactivate();
    }
}

/// Store the fetch result unless the owning gate is gone or already settled.
fn commit(
    alive: &AtomicBool,
    sender: &Weak<watch::Sender<IdentityState>>,
    state: IdentityState,
) -> bool {
    if !alive.load(Ordering::Acquire) {
        debug!("[AccessRoleGate] Gate deactivated, discarding identity result");
        return false;
    }
    let Some(sender) = sender.upgrade() else {
        debug!("[AccessRoleGate] Gate dropped, discarding identity result");
        return false;
    };

    sender.send_if_modified(|current| {
        if current.is_pending() {
            *current = state;
            true
        } else {
            false
        }
    })
}
