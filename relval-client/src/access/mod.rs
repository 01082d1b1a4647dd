//! Role gating for the current user
//!
//! [`AccessRoleGate`] fetches the caller's identity once and answers "does the
//! current user hold at least role X" synchronously from the cached result.
//! Until the fetch resolves every check answers `false`.

pub mod errors;
pub mod gate;
pub mod state;
pub mod types;

pub use errors::IdentityError;
pub use gate::AccessRoleGate;
pub use state::IdentityState;
pub use types::{UserInfo, UserInfoEnvelope};
