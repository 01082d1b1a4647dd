//! Identity fetch error types

use thiserror::Error;

/// Why the identity could not be resolved.
///
/// Cloneable so the failure can be kept in the gate's observable state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// Transport-level failure before any response arrived
    #[error("Identity request failed: {0}")]
    FetchFailed(String),

    /// The endpoint answered with a non-success status
    #[error("Identity request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The body did not match `{ "response": { "role_index": .. } }`
    #[error("Malformed identity response: {0}")]
    MalformedResponse(String),

    /// The gate was activated outside of an async runtime
    #[error("No async runtime available to run the identity fetch")]
    NoRuntime,
}

impl From<reqwest::Error> for IdentityError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            IdentityError::MalformedResponse(err.to_string())
        } else {
            IdentityError::FetchFailed(err.to_string())
        }
    }
}

impl From<serde_json::Error> for IdentityError {
    fn from(err: serde_json::Error) -> Self {
        IdentityError::MalformedResponse(err.to_string())
    }
}
