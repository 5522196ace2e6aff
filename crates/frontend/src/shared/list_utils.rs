/// List helpers: search highlighting and the debounced search input
use crate::shared::data_table::state::SEARCH_MIN_CHARS;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Split `text` into `(segment, is_match)` parts for a case-insensitive `filter`.
///
/// Filters shorter than the search minimum produce a single unmatched part.
/// Text whose lowercase form changes byte length is never split, so slicing
/// stays on char boundaries.
pub fn split_matches(text: &str, filter: &str) -> Vec<(String, bool)> {
    let filter = filter.trim();
    let text_lower = text.to_lowercase();
    let filter_lower = filter.to_lowercase();

    if filter.chars().count() < SEARCH_MIN_CHARS
        || text_lower.len() != text.len()
        || !text_lower.contains(&filter_lower)
    {
        return vec![(text.to_string(), false)];
    }

    let mut parts = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        if start > last_pos {
            parts.push((text[last_pos..start].to_string(), false));
        }
        parts.push((text[start..end].to_string(), true));
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push((text[last_pos..].to_string(), false));
    }
    parts
}

/// Highlight matches in text (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts = split_matches(text, filter);
    if parts.len() == 1 && !parts[0].1 {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let views: Vec<AnyView> = parts
        .into_iter()
        .map(|(segment, is_match)| {
            if is_match {
                view! { <mark class="table__highlight">{segment}</mark> }.into_any()
            } else {
                view! { <span>{segment}</span> }.into_any()
            }
        })
        .collect();
    view! { <>{views}</> }.into_any()
}

/// Search field with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value (for display)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the debounced value
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        format!("Search (min. {} chars)...", SEARCH_MIN_CHARS)
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());

    // Only the latest keystroke's timer may fire
    let generation = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        generation.update_value(|g| *g += 1);
        let mine = generation.get_value();

        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.try_get_value() == Some(mine) {
                on_change.run(new_value);
            }
        });
    };

    let is_filter_active = move || value.get().trim().chars().count() >= SEARCH_MIN_CHARS;

    let clear_filter = move |_| {
        generation.update_value(|g| *g += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class=move || {
                    if is_filter_active() {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button class="search-input__clear" on:click=clear_filter title="Clear">
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_filter_does_not_split() {
        assert_eq!(split_matches("Alice", "al"), vec![("Alice".to_string(), false)]);
    }

    #[test]
    fn test_all_matches_case_insensitive() {
        assert_eq!(
            split_matches("Anna Annabel", "ANN"),
            vec![
                ("Ann".to_string(), true),
                ("a ".to_string(), false),
                ("Ann".to_string(), true),
                ("abel".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_no_match_returns_whole_text() {
        assert_eq!(split_matches("Bob", "xyz"), vec![("Bob".to_string(), false)]);
    }
}
