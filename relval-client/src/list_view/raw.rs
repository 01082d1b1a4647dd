//! Name-tagged action envelope
//!
//! Views that build actions from strings (or receive them as JSON such as
//! `{"type": "CHANGE_PAGE", "payload": 3}`) go through [`RawAction`]. This is
//! the only place an unknown action type can appear, and it is rejected here
//! before any state is touched.

use relval_model::Action;
use relval_model::action::types;
use serde::{Deserialize, Serialize};

use super::errors::StoreError;

/// Loosely typed action as dispatched by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAction<R> {
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<R>>,
    #[serde(rename = "totalRows", skip_serializing_if = "Option::is_none")]
    pub total_rows: Option<u64>,
}

impl<R> RawAction<R> {
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            payload: None,
            data: None,
            total_rows: None,
        }
    }

    pub fn with_payload(mut self, payload: u64) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn with_data(mut self, data: Vec<R>, total_rows: Option<u64>) -> Self {
        self.data = Some(data);
        self.total_rows = total_rows;
        self
    }
}

/// Conversion into a typed [`Action`], failing for unknown or incomplete
/// requests.
pub trait IntoAction<R> {
    fn into_action(self) -> Result<Action<R>, StoreError>;
}

impl<R> IntoAction<R> for Action<R> {
    fn into_action(self) -> Result<Action<R>, StoreError> {
        Ok(self)
    }
}

impl<R> IntoAction<R> for RawAction<R> {
    fn into_action(self) -> Result<Action<R>, StoreError> {
        match self.action_type.as_str() {
            types::SET_DATA => {
                let data = self.data.ok_or(StoreError::MissingField {
                    action_type: types::SET_DATA,
                    field: "data",
                })?;
                Ok(Action::SetData {
                    data,
                    total_rows: self.total_rows,
                })
            }
            types::DO_NOTHING => Ok(Action::DoNothing),
            types::CHANGE_PAGE => {
                let payload = self.payload.ok_or(StoreError::MissingField {
                    action_type: types::CHANGE_PAGE,
                    field: "payload",
                })?;
                Ok(Action::ChangePage { payload })
            }
            _ => Err(StoreError::UnknownAction {
                action_type: self.action_type,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_convert() {
        let action = RawAction::<u8>::new("CHANGE_PAGE").with_payload(4);
        assert_eq!(action.into_action(), Ok(Action::ChangePage { payload: 4 }));

        let action = RawAction::new("SET_DATA").with_data(vec![1u8, 2], Some(2));
        assert_eq!(
            action.into_action(),
            Ok(Action::SetData {
                data: vec![1, 2],
                total_rows: Some(2)
            })
        );

        assert_eq!(
            RawAction::<u8>::new("DO_NOTHING").into_action(),
            Ok(Action::DoNothing)
        );
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let err = RawAction::<u8>::new("BOGUS").into_action().unwrap_err();
        assert_eq!(
            err,
            StoreError::UnknownAction {
                action_type: "BOGUS".into()
            }
        );
    }

    #[test]
    fn test_type_matching_is_case_sensitive() {
        let err = RawAction::<u8>::new("change_page")
            .with_payload(1)
            .into_action()
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownAction { .. }));
    }

    #[test]
    fn test_missing_fields_are_reported() {
        assert_eq!(
            RawAction::<u8>::new("CHANGE_PAGE").into_action(),
            Err(StoreError::MissingField {
                action_type: "CHANGE_PAGE",
                field: "payload"
            })
        );
        assert_eq!(
            RawAction::<u8>::new("SET_DATA").into_action(),
            Err(StoreError::MissingField {
                action_type: "SET_DATA",
                field: "data"
            })
        );
    }

    #[test]
    fn test_deserializes_from_json_envelope() {
        let raw: RawAction<serde_json::Value> = serde_json::from_str(
            r#"{"type":"SET_DATA","data":[{"prepid":"a"}],"totalRows":10}"#,
        )
        .unwrap();
        assert_eq!(raw.action_type, "SET_DATA");
        assert_eq!(raw.total_rows, Some(10));
        assert_eq!(raw.data.as_ref().map(Vec::len), Some(1));

        let raw: RawAction<serde_json::Value> =
            serde_json::from_str(r#"{"type":"CHANGE_PAGE","payload":7}"#).unwrap();
        assert_eq!(raw.into_action(), Ok(Action::ChangePage { payload: 7 }));
    }
}
