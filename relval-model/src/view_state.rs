use std::collections::HashMap;
use std::num::NonZeroU64;

use crate::pagination::Pagination;

/// Identifier of a row within the table view.
pub type RowId = String;

/// Snapshot of pagination, dataset and selection for a tabular view.
///
/// Snapshots are never edited in place by the store; every transition builds
/// a new one. `page_size` is non-zero by construction and `current_page` is
/// unsigned, so the pagination invariants hold for every reachable value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ViewState<R> {
    /// Rows of the current page, opaque to the store
    pub data: Vec<R>,
    /// Total rows known to the server, `None` before the first load
    pub total_rows: Option<u64>,
    pub current_page: u64,
    pub page_size: NonZeroU64,
    /// Row id -> selected. Reserved; no action touches it yet.
    pub selected_items: HashMap<RowId, bool>,
}

impl<R> ViewState<R> {
    /// Empty view positioned at the given page.
    pub fn from_pagination(pagination: Pagination) -> Self {
        Self {
            data: Vec::new(),
            total_rows: None,
            current_page: pagination.page,
            page_size: pagination.limit,
            selected_items: HashMap::new(),
        }
    }

    /// Current page and size as a [`Pagination`] pair.
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.current_page,
            limit: self.page_size,
        }
    }

    /// Number of pages, once the total is known.
    pub fn page_count(&self) -> Option<u64> {
        self.total_rows
            .map(|total| total.div_ceil(self.page_size.get()))
    }

    /// Index of the first row on the current page.
    pub fn offset(&self) -> u64 {
        self.current_page.saturating_mul(self.page_size.get())
    }
}

impl<R> Default for ViewState<R> {
    fn default() -> Self {
        Self::from_pagination(Pagination::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(page: u64, size: u64) -> ViewState<u32> {
        ViewState::from_pagination(Pagination {
            page,
            limit: NonZeroU64::new(size).unwrap(),
        })
    }

    #[test]
    fn test_new_state_is_empty() {
        let s = state(2, 10);
        assert!(s.data.is_empty());
        assert_eq!(s.total_rows, None);
        assert!(s.selected_items.is_empty());
        assert_eq!(s.current_page, 2);
        assert_eq!(s.page_size.get(), 10);
    }

    #[test]
    fn test_page_count_unknown_until_total_known() {
        let mut s = state(0, 10);
        assert_eq!(s.page_count(), None);

        s.total_rows = Some(0);
        assert_eq!(s.page_count(), Some(0));
        s.total_rows = Some(95);
        assert_eq!(s.page_count(), Some(10));
        s.total_rows = Some(100);
        assert_eq!(s.page_count(), Some(10));
    }

    #[test]
    fn test_offset_saturates() {
        assert_eq!(state(3, 25).offset(), 75);
        assert_eq!(state(u64::MAX, 2).offset(), u64::MAX);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(state(1, 5)).unwrap();
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["pageSize"], 5);
        assert!(json["totalRows"].is_null());
        assert!(json["selectedItems"].as_object().unwrap().is_empty());
    }
}
