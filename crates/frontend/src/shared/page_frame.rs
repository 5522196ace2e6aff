//! PageFrame: standard root wrapper of an entity page.
//!
//! The root element gets `id="{segment}--{category}"` (e.g. `"students--list"`)
//! and `data-page-category`, so a page found in the DOM inspector maps back
//! to its entity.

use leptos::prelude::*;

/// List of records: table with filters and pagination
pub const PAGE_CAT_LIST: &str = "list";

/// `{entity}--{category}`
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{}--{}", entity, category)
}

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

#[component]
pub fn PageFrame(
    #[prop(into)]
    page_id: String,
    category: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(&page_id) {
        log::warn!("Page id '{}' is not in {{entity}}--{{category}} form", page_id);
    }
    view! {
        <div id=page_id class="page" data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert_eq!(page_id("students", PAGE_CAT_LIST), "students--list");
        assert!(is_valid_page_id("exams--list"));
        assert!(!is_valid_page_id("exams"));
        assert!(!is_valid_page_id("--list"));
    }
}
