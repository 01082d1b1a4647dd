/// Type tags used when actions are dispatched by name.
pub mod types {
    pub const SET_DATA: &str = "SET_DATA";
    pub const DO_NOTHING: &str = "DO_NOTHING";
    pub const CHANGE_PAGE: &str = "CHANGE_PAGE";
}

/// Requests that move a [`ViewState`](crate::ViewState) to its next snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum Action<R> {
    /// Replace the page rows and the server-side total
    SetData {
        data: Vec<R>,
        total_rows: Option<u64>,
    },
    /// Explicit no-op, distinct from dispatching nothing
    DoNothing,
    /// Jump to a page. The target is not checked against the total.
    ChangePage { payload: u64 },
}

impl<R> Action<R> {
    /// Type tag used by views that dispatch actions by name.
    pub fn action_type(&self) -> &'static str {
        match self {
            Action::SetData { .. } => types::SET_DATA,
            Action::DoNothing => types::DO_NOTHING,
            Action::ChangePage { .. } => types::CHANGE_PAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_type_tags() {
        let set: Action<()> = Action::SetData {
            data: vec![],
            total_rows: None,
        };
        assert_eq!(set.action_type(), "SET_DATA");
        assert_eq!(Action::<()>::DoNothing.action_type(), "DO_NOTHING");
        assert_eq!(
            Action::<()>::ChangePage { payload: 3 }.action_type(),
            "CHANGE_PAGE"
        );
    }
}
