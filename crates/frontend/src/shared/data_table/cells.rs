use super::column::{CellKind, ColumnDef};
use crate::shared::components::ui::{badge_variant, Badge};
use crate::shared::list_utils::highlight_matches;
use contracts::shared::Record;
use leptos::prelude::*;
use serde_json::Value;

/// Render one data cell. Reads the record, never changes it.
pub fn render_cell(column: &ColumnDef, record: &Record, search: &str) -> AnyView {
    let text = column.cell_text(record);
    match column.kind {
        CellKind::Actions => view! { <></> }.into_any(),
        CellKind::Boolean => {
            let checked = matches!(record.get(column.key), Some(Value::Bool(true)));
            view! {
                <input type="checkbox" class="table__bool" prop:checked=checked disabled=true />
            }
            .into_any()
        }
        CellKind::Email if !text.is_empty() => view! {
            <a class="table__link" href={format!("mailto:{}", text)}>
                {highlight_matches(&text, search)}
            </a>
        }
        .into_any(),
        CellKind::Badge if !text.is_empty() => {
            let variant = badge_variant(&text).to_string();
            let search = search.to_string();
            view! {
                <Badge variant=variant>{move || highlight_matches(&text, &search)}</Badge>
            }
            .into_any()
        }
        CellKind::Number { .. } => view! { <span class="table__number">{text}</span> }.into_any(),
        _ => highlight_matches(&text, search),
    }
}
