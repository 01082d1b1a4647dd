//! Identity resolution state machine

use super::errors::IdentityError;
use super::types::UserInfo;

/// Lifecycle of the one-shot identity fetch.
///
/// Starts at `Pending` and moves to `Resolved` or `Failed` at most once.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum IdentityState {
    /// Fetch not issued yet or still in flight
    #[default]
    Pending,

    /// Identity fetched and cached
    Resolved(UserInfo),

    /// Fetch finished without a usable identity
    Failed(IdentityError),
}

impl IdentityState {
    pub fn is_pending(&self) -> bool {
        matches!(self, IdentityState::Pending)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, IdentityState::Resolved(_))
    }

    /// Cached identity, if the fetch succeeded
    pub fn user_info(&self) -> Option<&UserInfo> {
        match self {
            IdentityState::Resolved(info) => Some(info),
            IdentityState::Pending | IdentityState::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&IdentityError> {
        match self {
            IdentityState::Failed(err) => Some(err),
            IdentityState::Pending | IdentityState::Resolved(_) => None,
        }
    }
}

impl From<Result<UserInfo, IdentityError>> for IdentityState {
    fn from(result: Result<UserInfo, IdentityError>) -> Self {
        match result {
            Ok(info) => IdentityState::Resolved(info),
            Err(err) => IdentityState::Failed(err),
        }
    }
}
