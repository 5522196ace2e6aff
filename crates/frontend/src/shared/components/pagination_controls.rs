use crate::shared::icons::icon;
use contracts::shared::{PageNav, PaginationMeta};
use leptos::prelude::*;

/// Page sizes offered in the selector. A server page size outside the
/// configured options is added so the select always shows the current size.
pub fn page_size_choices(options: &[u32], current: u32) -> Vec<u32> {
    let mut choices = options.to_vec();
    if current > 0 && !choices.contains(&current) {
        choices.push(current);
        choices.sort_unstable();
    }
    choices
}

/// Controlled pagination bar: first/previous/next/last, position label and
/// page size selector. Pages are 1-based.
///
/// The control only reports intent. After `on_page_size_change` the caller
/// must request page 1 again.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    meta: Signal<PaginationMeta>,

    /// Callback with the requested page
    on_page_change: Callback<u32>,

    /// Callback with the new page size
    on_page_size_change: Callback<u32>,

    /// Available page sizes (defaults to [10, 25, 50, 100])
    #[prop(optional)]
    page_size_options: Option<Vec<u32>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![10, 25, 50, 100]);

    let nav_button = move |nav: PageNav, icon_name: &'static str, title: &'static str| {
        view! {
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if let Some(page) = meta.get_untracked().target(nav) {
                        on_page_change.run(page);
                    }
                }
                disabled=move || !meta.get().is_enabled(nav)
                title=title
            >
                {icon(icon_name)}
            </button>
        }
    };

    view! {
        <div class="pagination-controls">
            {nav_button(PageNav::First, "chevrons-left", "First page")}
            {nav_button(PageNav::Previous, "chevron-left", "Previous page")}
            <span class="pagination-info">{move || meta.get().label()}</span>
            {nav_button(PageNav::Next, "chevron-right", "Next page")}
            {nav_button(PageNav::Last, "chevrons-right", "Last page")}
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || meta.get().per_page.to_string()
            >
                {move || page_size_choices(&page_size_opts, meta.get().per_page).into_iter().map(|size| {
                    view! {
                        <option value={size.to_string()} selected=move || meta.get().per_page == size>
                            {format!("{} / page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_sizes_are_kept_as_is() {
        assert_eq!(page_size_choices(&[10, 25, 50, 100], 25), vec![10, 25, 50, 100]);
    }

    #[test]
    fn test_server_page_size_is_added_in_order() {
        assert_eq!(page_size_choices(&[10, 25, 50, 100], 15), vec![10, 15, 25, 50, 100]);
    }
}
