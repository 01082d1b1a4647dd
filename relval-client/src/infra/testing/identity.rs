use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::access::{IdentityError, UserInfo};
use crate::infra::services::IdentityService;

/// Canned identity source that counts how often it is asked.
///
/// A gated stub holds every fetch until [`TestIdentityService::release`] is
/// called, which lets tests observe the gate while the fetch is in flight.
#[derive(Debug)]
pub struct TestIdentityService {
    outcome: Result<UserInfo, IdentityError>,
    calls: AtomicUsize,
    hold: Option<Arc<Notify>>,
}

impl TestIdentityService {
    pub fn new(outcome: Result<UserInfo, IdentityError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            hold: None,
        }
    }

    /// Stub that resolves to a user with the given rank.
    pub fn resolving(role_index: i64) -> Self {
        Self::new(Ok(UserInfo::new(role_index)))
    }

    pub fn failing(err: IdentityError) -> Self {
        Self::new(Err(err))
    }

    /// Hold fetches until [`release`](Self::release) is called.
    pub fn gated(mut self) -> Self {
        self.hold = Some(Arc::new(Notify::new()));
        self
    }

    /// Let a held fetch complete. A release before the fetch starts is kept.
    pub fn release(&self) {
        if let Some(hold) = &self.hold {
            hold.notify_one();
        }
    }

    /// Number of fetches started so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityService for TestIdentityService {
    async fn fetch_user_info(&self) -> Result<UserInfo, IdentityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(hold) = &self.hold {
            hold.notified().await;
        }
        self.outcome.clone()
    }
}
