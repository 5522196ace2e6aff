//! Server-driven pagination: the envelope the list endpoints return and the
//! query the frontend sends back.

use serde::{Deserialize, Serialize};

/// Paging state reported by the API. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// Navigation intent of a pagination control button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Previous,
    Next,
    Last,
}

impl PaginationMeta {
    pub fn new(current_page: u32, last_page: u32, per_page: u32) -> Self {
        Self {
            current_page,
            last_page,
            per_page,
            total: None,
        }
        .normalized()
    }

    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    /// Clamp values a misbehaving server may send (`last_page: 0` for an empty
    /// result set, a current page past the end) into the documented ranges.
    pub fn normalized(self) -> Self {
        let last_page = self.last_page.max(1);
        Self {
            current_page: self.current_page.clamp(1, last_page),
            last_page,
            per_page: self.per_page.max(1),
            total: self.total,
        }
    }

    pub fn is_first(&self) -> bool {
        self.current_page <= 1
    }

    pub fn is_last(&self) -> bool {
        self.current_page >= self.last_page
    }

    pub fn is_enabled(&self, nav: PageNav) -> bool {
        match nav {
            PageNav::First | PageNav::Previous => !self.is_first(),
            PageNav::Next | PageNav::Last => !self.is_last(),
        }
    }

    /// Page a navigation button would request, `None` when it is disabled
    pub fn target(&self, nav: PageNav) -> Option<u32> {
        if !self.is_enabled(nav) {
            return None;
        }
        Some(match nav {
            PageNav::First => 1,
            PageNav::Previous => self.current_page - 1,
            PageNav::Next => self.current_page + 1,
            PageNav::Last => self.last_page,
        })
    }

    pub fn label(&self) -> String {
        match self.total {
            Some(total) => format!(
                "Page {} of {} ({} total)",
                self.current_page, self.last_page, total
            ),
            None => format!("Page {} of {}", self.current_page, self.last_page),
        }
    }
}

/// Paginated list envelope: `{ "data": [...], "current_page": 1, "last_page": 5, ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    #[serde(flatten)]
    pub meta: PaginationMeta,
}

/// Some list endpoints are not paginated and return a bare array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Paginated(PaginatedResponse<T>),
    Plain(Vec<T>),
}

impl<T> ListPayload<T> {
    /// Normalize to a paginated response; a bare array is a single page.
    pub fn into_page(self, per_page: u32) -> PaginatedResponse<T> {
        match self {
            ListPayload::Paginated(mut page) => {
                page.meta = page.meta.normalized();
                page
            }
            ListPayload::Plain(data) => {
                let total = data.len() as u64;
                PaginatedResponse {
                    meta: PaginationMeta::new(1, 1, per_page.max(data.len() as u32))
                        .with_total(total),
                    data,
                }
            }
        }
    }
}

/// Query the frontend sends to a list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: u32,
    pub per_page: u32,
}

impl ListQuery {
    pub fn new(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
        }
    }

    pub fn with_page(self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }

    /// Changing the page size always restarts at page 1 so the next request
    /// cannot point past the new last page.
    pub fn with_per_page(self, per_page: u32) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_page_disables_backwards_navigation() {
        let meta = PaginationMeta::new(1, 5, 10);

        assert_eq!(meta.label(), "Page 1 of 5");
        assert!(!meta.is_enabled(PageNav::First));
        assert!(!meta.is_enabled(PageNav::Previous));
        assert_eq!(meta.target(PageNav::Next), Some(2));
        assert_eq!(meta.target(PageNav::Last), Some(5));
    }

    #[test]
    fn test_last_page_disables_forward_navigation() {
        let meta = PaginationMeta::new(5, 5, 10);

        assert_eq!(meta.target(PageNav::Next), None);
        assert_eq!(meta.target(PageNav::Last), None);
        assert_eq!(meta.target(PageNav::Previous), Some(4));
        assert_eq!(meta.target(PageNav::First), Some(1));
    }

    #[test]
    fn test_single_page_disables_everything() {
        let meta = PaginationMeta::new(1, 1, 25);
        for nav in [PageNav::First, PageNav::Previous, PageNav::Next, PageNav::Last] {
            assert_eq!(meta.target(nav), None);
        }
    }

    #[test]
    fn test_normalized_clamps_out_of_range_values() {
        let meta = PaginationMeta {
            current_page: 9,
            last_page: 0,
            per_page: 0,
            total: Some(0),
        }
        .normalized();

        assert_eq!((meta.current_page, meta.last_page, meta.per_page), (1, 1, 1));
    }

    #[test]
    fn test_label_with_total() {
        let meta = PaginationMeta::new(2, 3, 10).with_total(27);
        assert_eq!(meta.label(), "Page 2 of 3 (27 total)");
    }

    #[test]
    fn test_page_size_change_resets_to_first_page() {
        let query = ListQuery::new(10).with_page(4).with_per_page(50);
        assert_eq!(query, ListQuery { page: 1, per_page: 50 });
    }

    #[test]
    fn test_parse_paginated_envelope() {
        let payload: ListPayload<serde_json::Value> = serde_json::from_value(json!({
            "data": [{"id": 1}, {"id": 2}],
            "current_page": 2,
            "last_page": 4,
            "per_page": 2,
            "total": 8,
            "from": 3,
            "to": 4
        }))
        .unwrap();

        let page = payload.into_page(10);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.meta, PaginationMeta::new(2, 4, 2).with_total(8));
    }

    #[test]
    fn test_parse_plain_array_as_single_page() {
        let payload: ListPayload<serde_json::Value> =
            serde_json::from_value(json!([{"id": 1}, {"id": 2}, {"id": 3}])).unwrap();

        let page = payload.into_page(10);
        assert_eq!(page.meta.current_page, 1);
        assert_eq!(page.meta.last_page, 1);
        assert_eq!(page.meta.total, Some(3));
    }
}
