//! Core data model definitions shared across RelVal client crates.
//!
//! Everything here is plain data: the table-view snapshot and the actions that
//! drive it, the pagination parameters read from a page URL, and the ordered
//! role hierarchy used to gate features.

pub mod action;
pub mod error;
pub mod pagination;
pub mod prelude;
pub mod role;
pub mod view_state;

pub use action::Action;
pub use error::{ModelError, Result as ModelResult};
pub use pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, Pagination};
pub use role::Role;
pub use view_state::{RowId, ViewState};
