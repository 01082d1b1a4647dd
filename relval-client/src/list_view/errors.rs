use thiserror::Error;

/// Failures raised while folding an action into the view state.
///
/// No partial update happens on any of these; the input snapshot is left as
/// it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The action type is not one the store handles
    #[error("Unknown action type: {action_type:?}")]
    UnknownAction { action_type: String },

    /// A known action type arrived without the field it needs
    #[error("Action {action_type} is missing required field `{field}`")]
    MissingField {
        action_type: &'static str,
        field: &'static str,
    },
}
