//! API utilities for frontend-backend communication
//!
//! Builds collection and item URLs of the REST JSON API. Ids are always
//! percent-encoded, list queries are serialized with `serde_qs`.

use contracts::domain::common::{EntityKind, RecordId};
use contracts::shared::ListQuery;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

fn trimmed(base: &str) -> &str {
    base.trim_end_matches('/')
}

/// `{base}/api/{segment}`
pub fn collection_url(base: &str, kind: EntityKind) -> String {
    format!("{}/api/{}", trimmed(base), kind.api_segment())
}

/// `{base}/api/{segment}?page=..&per_page=..`
pub fn list_url(base: &str, kind: EntityKind, query: &ListQuery) -> String {
    let url = collection_url(base, kind);
    match serde_qs::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("{}?{}", url, qs),
        _ => url,
    }
}

/// `{base}/api/{segment}/{id}`
pub fn item_url(base: &str, kind: EntityKind, id: &RecordId) -> String {
    format!(
        "{}/{}",
        collection_url(base, kind),
        urlencoding::encode(id.as_str())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_url_carries_page_and_size() {
        let query = ListQuery::new(25).with_page(3);
        assert_eq!(
            list_url("http://localhost:3000/", EntityKind::Student, &query),
            "http://localhost:3000/api/students?page=3&per_page=25"
        );
    }

    #[test]
    fn test_item_url_encodes_id() {
        assert_eq!(
            item_url("http://h:3000", EntityKind::SchoolClass, &RecordId::new("7 B/1")),
            "http://h:3000/api/classes/7%20B%2F1"
        );
        assert_eq!(
            item_url("", EntityKind::Exam, &RecordId::from(12)),
            "/api/exams/12"
        );
    }
}
