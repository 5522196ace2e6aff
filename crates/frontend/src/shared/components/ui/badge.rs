use leptos::prelude::*;

/// Badge variant for a status value
pub fn badge_variant(value: &str) -> &'static str {
    match value.trim().to_lowercase().as_str() {
        "scheduled" | "upcoming" => "primary",
        "completed" | "active" | "passed" | "yes" => "success",
        "pending" | "postponed" => "warning",
        "cancelled" | "canceled" | "failed" | "inactive" | "no" => "error",
        _ => "neutral",
    }
}

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_variant() {
        assert_eq!(badge_variant("Scheduled"), "primary");
        assert_eq!(badge_variant("completed"), "success");
        assert_eq!(badge_variant(" cancelled "), "error");
        assert_eq!(badge_variant("female"), "neutral");
    }
}
