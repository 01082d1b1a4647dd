use log::{trace, warn};
use relval_model::{Action, Pagination, ViewState};

use super::errors::StoreError;
use super::raw::IntoAction;

/// Build the starting snapshot for a view from its page query string.
///
/// Only `page` and `limit` are read; invalid values fall back to page 0 and
/// 50 rows. The same query always yields the same state.
pub fn initial_state<R>(query: &str) -> ViewState<R> {
    let pagination = Pagination::from_query(query);
    trace!(
        "[ListView] Initial pagination page={} limit={}",
        pagination.page, pagination.limit
    );
    ViewState::from_pagination(pagination)
}

/// Fold one action into a new snapshot.
///
/// The input is never modified. Unknown or incomplete actions fail before
/// anything is built, so a failed transition has no effect.
pub fn transition<R, A>(
    state: &ViewState<R>,
    action: A,
) -> Result<ViewState<R>, StoreError>
where
    R: Clone,
    A: IntoAction<R>,
{
    let next = match action.into_action()? {
        Action::SetData { data, total_rows } => ViewState {
            data,
            total_rows,
            current_page: state.current_page,
            page_size: state.page_size,
            selected_items: state.selected_items.clone(),
        },
        Action::DoNothing => state.clone(),
        Action::ChangePage { payload } => ViewState {
            current_page: payload,
            ..state.clone()
        },
    };
    Ok(next)
}

/// Owner of the current snapshot for one table view.
#[derive(Debug, Clone)]
pub struct ListViewStore<R> {
    state: ViewState<R>,
}

impl<R: Clone> ListViewStore<R> {
    /// Create a store seeded from the page query string.
    pub fn from_query(query: &str) -> Self {
        Self {
            state: initial_state(query),
        }
    }

    pub fn with_state(state: ViewState<R>) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &ViewState<R> {
        &self.state
    }

    pub fn into_state(self) -> ViewState<R> {
        self.state
    }

    /// Replace the current snapshot with the result of `action`.
    ///
    /// On failure the current snapshot is kept and the error is returned.
    pub fn dispatch<A>(&mut self, action: A) -> Result<&ViewState<R>, StoreError>
    where
        A: IntoAction<R>,
    {
        match transition(&self.state, action) {
            Ok(next) => {
                trace!(
                    "[ListView] page={} rows={} total={:?}",
                    next.current_page,
                    next.data.len(),
                    next.total_rows
                );
                self.state = next;
                Ok(&self.state)
            }
            Err(err) => {
                warn!("[ListView] Rejected action: {}", err);
                Err(err)
            }
        }
    }
}

impl<R: Clone> Default for ListViewStore<R> {
    fn default() -> Self {
        Self::with_state(ViewState::default())
    }
}
