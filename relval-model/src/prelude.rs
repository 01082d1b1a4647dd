//! UI focused snapshot of the types surface.
//! Prefer importing from this module when wiring views to the store.

pub use super::action::Action;
pub use super::error::ModelError;
pub use super::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, Pagination};
pub use super::role::Role;
pub use super::view_state::{RowId, ViewState};
