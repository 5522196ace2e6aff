use crate::shared::forms::{collect_form, raw_values, FieldKind, FormField};
use contracts::domain::common::EntityKind;
use contracts::domain::validate_record;
use contracts::shared::validation::FORM_FIELD;
use contracts::shared::{Record, ValidationErrors};
use leptos::prelude::*;
use thaw::*;

/// Create/edit form for one record.
///
/// Values are pre-filled from `initial`. On submit the raw inputs are
/// converted and validated against the entity's rules; only a valid record
/// reaches `on_submit`. Field errors are shown under their inputs.
#[component]
pub fn RecordForm(
    kind: EntityKind,
    fields: Vec<FormField>,
    initial: Record,
    #[prop(into)]
    submitting: Signal<bool>,
    /// Error of the last API call, shown above the actions
    #[prop(into)]
    server_error: Signal<Option<String>>,
    on_submit: Callback<Record>,
    on_cancel: Callback<()>,
    #[prop(into)]
    submit_label: String,
) -> impl IntoView {
    let values = RwSignal::new(raw_values(&fields, &initial));
    let errors = RwSignal::new(ValidationErrors::new());
    let fields = StoredValue::new(fields);

    let submit = move || {
        if submitting.get_untracked() {
            return;
        }
        let collected = fields.with_value(|f| values.with_untracked(|v| collect_form(f, v)));
        let result = collected.and_then(|record| validate_record(kind, &record).map(|_| record));
        match result {
            Ok(record) => {
                errors.set(ValidationErrors::new());
                on_submit.run(record);
            }
            Err(e) => {
                log::debug!("{} form has {} invalid field(s)", kind.singular(), e.len());
                errors.set(e);
            }
        }
    };

    let field_error = move |key: &'static str| {
        move || {
            errors.with(|e| e.for_field(key).map(str::to_string)).map(|message| {
                view! { <div class="form__error">{message}</div> }
            })
        }
    };

    let field_view = move |field: FormField| {
        let key = field.key;
        let value = move || values.with(|v| v.get(key).cloned().unwrap_or_default());
        let on_input = move |ev: leptos::ev::Event| {
            let raw = event_target_value(&ev);
            values.update(|v| {
                v.insert(key.to_string(), raw);
            });
        };

        let input = match field.kind {
            FieldKind::TextArea => view! {
                <textarea class="form__input form__textarea" rows="3" prop:value=value on:input=on_input />
            }
            .into_any(),
            FieldKind::Select(options) => view! {
                <select class="form__input" prop:value=value on:change=on_input>
                    <option value="">"Select..."</option>
                    {options.iter().map(|option| view! {
                        <option value={*option} selected=move || value() == *option>{*option}</option>
                    }).collect_view()}
                </select>
            }
            .into_any(),
            other => view! {
                <input
                    class="form__input"
                    type={other.input_type()}
                    step=(other == FieldKind::Number).then_some("any")
                    prop:value=value
                    on:input=on_input
                />
            }
            .into_any(),
        };

        view! {
            <div class="form__group">
                <label class="form__label">
                    {field.label}
                    {field.required.then_some(view! { <span class="form__required">" *"</span> })}
                </label>
                {input}
                {field_error(key)}
            </div>
        }
    };

    view! {
        <div class="form">
            {move || errors.with(|e| e.for_field(FORM_FIELD).map(str::to_string)).map(|message| {
                view! { <div class="form__error form__error--block">{message}</div> }
            })}
            {fields.get_value().into_iter().map(field_view).collect_view()}
            {move || server_error.get().map(|message| {
                view! { <div class="form__error form__error--block">{message}</div> }
            })}
            <Flex gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=submitting
                    on_click=move |_| submit()
                >
                    {move || if submitting.get() { "Saving...".to_string() } else { submit_label.clone() }}
                </Button>
                <Button on_click=move |_| on_cancel.run(())>
                    "Cancel"
                </Button>
            </Flex>
        </div>
    }
}
