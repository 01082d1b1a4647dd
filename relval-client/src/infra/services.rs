//! Service seams used by the access domain
//!
//! The gate only needs "fetch the current identity". Production wires in
//! [`ApiClient`](super::ApiClient); tests use
//! [`TestIdentityService`](super::testing::TestIdentityService).

use std::fmt::Debug;

use async_trait::async_trait;

use crate::access::{IdentityError, UserInfo};

/// Source of the current user's identity
#[async_trait]
pub trait IdentityService: Send + Sync + Debug {
    /// Fetch the identity of the caller. Called at most once per gate.
    async fn fetch_user_info(&self) -> Result<UserInfo, IdentityError>;
}
