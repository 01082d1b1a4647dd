//! Client-side core for the RelVal table views.
//!
//! - [`list_view`]: pagination/dataset store seeded from the page URL and
//!   advanced by a pure transition function.
//! - [`access`]: one-shot identity fetch with a role-hierarchy predicate.
//! - [`infra`]: HTTP client and the service seam the gate depends on.
//! - [`config`]: environment-driven client configuration.

pub mod access;
pub mod config;
pub mod infra;
pub mod list_view;

pub use access::{AccessRoleGate, IdentityError, IdentityState, UserInfo};
pub use config::ClientConfig;
pub use list_view::{
    IntoAction, ListViewStore, RawAction, StoreError, initial_state,
    transition,
};
pub use relval_model::{Action, Pagination, Role, ViewState};
