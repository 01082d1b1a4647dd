//! Table-view state store
//!
//! The store derives its starting snapshot from the page query string and
//! folds dispatched actions into new snapshots through [`transition`].

pub mod errors;
pub mod raw;
pub mod store;

pub use errors::StoreError;
pub use raw::{IntoAction, RawAction};
pub use store::{ListViewStore, initial_state, transition};
