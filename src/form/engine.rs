//! The schema-driven form component and its submit pipeline.
//!
//! ARCHITECTURE
//! ============
//! `FormModel` is the pure core: value map, error map, loading state, and
//! the validate/payload/merge steps. `SchemaForm` wraps it in a signal and
//! renders one control per field through the widget-kind dispatch below.
//! `perform_post` runs the submit pipeline: validate, build payload, POST,
//! drive the loading state, and merge server field errors on failure.
//! Submit failures are logged and surfaced inline; they never take down the
//! screen.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use leptos::prelude::*;

use crate::form::payload::{self, Encoding};
use crate::form::schema::{FieldDescriptor, FormSchema, WidgetKind};
use crate::form::validate::{self, FieldErrors};
use crate::form::value::{self, FieldEvent, FieldValue, FormValues};
use crate::net::http;

/// Submit lifecycle of a form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingState {
    #[default]
    Initial,
    Loading,
    Success,
    Error,
}

/// The non-visual state of a running form.
#[derive(Clone, Debug)]
pub struct FormModel {
    pub schema: FormSchema,
    pub values: FormValues,
    pub errors: FieldErrors,
    pub loading: LoadingState,
    pub encoding: Encoding,
}

impl FormModel {
    /// A fresh form populated from descriptor defaults.
    pub fn fresh(schema: FormSchema) -> Self {
        let values = value::fresh_values(&schema);
        Self {
            schema,
            values,
            errors: FieldErrors::new(),
            loading: LoadingState::Initial,
            encoding: Encoding::Json,
        }
    }

    /// A form editing an existing record.
    pub fn editing(schema: FormSchema, record: &serde_json::Value) -> Self {
        let values = value::values_from_record(&schema, record);
        Self {
            schema,
            values,
            errors: FieldErrors::new(),
            loading: LoadingState::Initial,
            encoding: Encoding::Json,
        }
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Apply one field change.
    pub fn set_field(&mut self, key: &str, event: FieldEvent) {
        self.values.insert(key.to_owned(), value::coerce_event(event));
    }

    /// Run validation and store the error map. Returns the error count;
    /// zero means the form may submit.
    pub fn validate(&mut self) -> usize {
        let data = if self.values.is_empty() { None } else { Some(&self.values) };
        self.errors = validate::validate(&self.schema, data);
        self.errors.len()
    }

    /// Merge structured per-field errors from a failed submit response.
    pub fn merge_server_errors(&mut self, fields: Vec<(String, String)>) {
        for (key, message) in fields {
            self.errors.insert(key, message);
        }
    }

    pub fn error_for(&self, key: &str) -> Option<String> {
        self.errors.get(key).cloned()
    }
}

/// Submit pipeline: validate, build the payload, POST it, and drive the
/// loading state. Returns `true` on success.
pub async fn perform_post(model: RwSignal<FormModel, LocalStorage>, path: &str) -> bool {
    let error_count = {
        let mut count = 0;
        model.update(|m| count = m.validate());
        count
    };
    if error_count > 0 {
        return false;
    }

    model.update(|m| m.loading = LoadingState::Loading);
    let (values, encoding) = model.with_untracked(|m| (m.values.clone(), m.encoding));

    let result = match encoding {
        Encoding::Json => {
            let body = payload::json_payload(&values);
            http::post_json::<serde_json::Value>(path, &body).await.map(|_| ())
        }
        Encoding::Multipart => {
            #[cfg(feature = "hydrate")]
            {
                let entries = payload::multipart_entries(&values);
                match payload::to_form_data(&entries) {
                    Ok(form) => http::post_form_data(path, form).await.map(|_| ()),
                    Err(e) => Err(http::ApiError::Network(e)),
                }
            }
            #[cfg(not(feature = "hydrate"))]
            {
                Err(http::ApiError::Network("not available on server".to_owned()))
            }
        }
    };

    match result {
        Ok(()) => {
            model.update(|m| m.loading = LoadingState::Success);
            true
        }
        Err(err) => {
            let field_errors = err.field_errors();
            model.update(|m| {
                m.merge_server_errors(field_errors);
                m.loading = LoadingState::Error;
            });
            leptos::logging::warn!("form submit to {path} failed: {err}");
            false
        }
    }
}

/// Parse a numeric widget's DOM value; unparsable input stays text so
/// validation can report it.
pub fn numeric_event(raw: String) -> FieldEvent {
    match raw.parse::<f64>() {
        Ok(n) => FieldEvent::Native(FieldValue::Number(n)),
        Err(_) => FieldEvent::Value(raw),
    }
}

/// Toggle one option inside a multi-select value.
pub fn toggle_selection(current: &FieldValue, option: &str, selected: bool) -> FieldValue {
    let mut items: Vec<FieldValue> = match current {
        FieldValue::List(items) => items.clone(),
        _ => Vec::new(),
    };
    let present = items.iter().position(|v| v.as_text() == Some(option));
    match (selected, present) {
        (true, None) => items.push(FieldValue::Text(option.to_owned())),
        (false, Some(idx)) => {
            items.remove(idx);
        }
        _ => {}
    }
    FieldValue::List(items)
}

/// A server-schema-driven form. Renders fields sorted by `order`, mirrors
/// every change to `on_change`, and submits to `action` via
/// [`perform_post`].
#[component]
pub fn SchemaForm(
    schema: FormSchema,
    /// Record to edit; omit for a create form.
    #[prop(optional)]
    record: Option<serde_json::Value>,
    /// POST target.
    action: String,
    #[prop(optional)] encoding: Encoding,
    #[prop(default = "Save".to_owned())] submit_label: String,
    /// Mirrors the full value map after every change.
    #[prop(optional)]
    on_change: Option<Callback<FormValues>>,
    #[prop(optional)] on_success: Option<Callback<()>>,
) -> impl IntoView {
    let model = RwSignal::new_local(
        match &record {
            Some(record) => FormModel::editing(schema.clone(), record),
            None => FormModel::fresh(schema.clone()),
        }
        .with_encoding(encoding),
    );

    let apply_change = move |key: String, event: FieldEvent| {
        model.update(|m| m.set_field(&key, event));
        if let Some(on_change) = on_change {
            on_change.run(model.with_untracked(|m| m.values.clone()));
        }
    };
    let apply_change = StoredValue::new(apply_change);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if model.with_untracked(|m| m.loading == LoadingState::Loading) {
            return;
        }
        let action = action.clone();
        leptos::task::spawn_local(async move {
            if perform_post(model, &action).await {
                if let Some(on_success) = on_success {
                    on_success.run(());
                }
            }
        });
    };

    let ordered = schema.ordered_keys();
    let columns = schema.columns.max(1);

    view! {
        <form class="schema-form" on:submit=on_submit>
            <div
                class="schema-form__grid"
                style=format!("grid-template-columns: repeat({columns}, 1fr)")
            >
                {ordered
                    .into_iter()
                    .map(|key| {
                        let desc = schema.fields[&key].clone();
                        view! { <FieldControl key=key desc=desc model=model apply_change=apply_change/> }
                    })
                    .collect_view()}
            </div>
            <Show when=move || model.with(|m| m.loading == LoadingState::Error && m.errors.is_empty())>
                <p class="schema-form__message schema-form__message--error">
                    "Saving failed. Please try again."
                </p>
            </Show>
            <Show when=move || model.with(|m| m.loading == LoadingState::Success)>
                <p class="schema-form__message schema-form__message--success">"Saved."</p>
            </Show>
            <button
                class="schema-form__submit"
                type="submit"
                disabled=move || model.with(|m| m.loading == LoadingState::Loading)
            >
                {submit_label}
            </button>
        </form>
    }
}

/// One rendered field: label, widget picked by kind, inline error.
#[component]
fn FieldControl<F>(
    key: String,
    desc: FieldDescriptor,
    model: RwSignal<FormModel, LocalStorage>,
    apply_change: StoredValue<F>,
) -> impl IntoView
where
    F: Fn(String, FieldEvent) + Copy + Send + Sync + 'static,
{
    let has_error = {
        let key = key.clone();
        move || model.with(|m| m.errors.contains_key(&key))
    };
    let error_text = {
        let key = key.clone();
        move || model.with(|m| m.error_for(&key).unwrap_or_default())
    };
    let span = desc.col_span.unwrap_or(1).max(1);

    view! {
        <label class="schema-form__field" style=format!("grid-column: span {span}")>
            <span class="schema-form__label">{desc.title.clone()}</span>
            {widget_view(key, &desc, model, apply_change)}
            <Show when=has_error>
                <span class="schema-form__error">{error_text.clone()}</span>
            </Show>
        </label>
    }
}

#[allow(clippy::too_many_lines)]
fn widget_view<F>(
    key: String,
    desc: &FieldDescriptor,
    model: RwSignal<FormModel, LocalStorage>,
    apply_change: StoredValue<F>,
) -> AnyView
where
    F: Fn(String, FieldEvent) + Copy + Send + Sync + 'static,
{
    let kind = desc.component;
    let placeholder = desc.placeholder.clone().unwrap_or_default();
    let text_value = {
        let key = key.clone();
        move || {
            model.with(|m| match m.values.get(&key) {
                Some(FieldValue::Text(s)) => s.clone(),
                Some(FieldValue::Number(n)) => n.to_string(),
                _ => String::new(),
            })
        }
    };
    let bool_value = {
        let key = key.clone();
        move || model.with(|m| matches!(m.values.get(&key), Some(FieldValue::Bool(true))))
    };

    match kind {
        WidgetKind::Text | WidgetKind::Password | WidgetKind::ColorInput | WidgetKind::PinInput => {
            let input_type = match kind {
                WidgetKind::Password => "password",
                WidgetKind::ColorInput => "color",
                _ => "text",
            };
            let max_length = if kind == WidgetKind::PinInput {
                desc.max.map(|m| m.to_string())
            } else {
                None
            };
            view! {
                <input
                    class="schema-form__input"
                    type=input_type
                    placeholder=placeholder
                    maxlength=max_length
                    prop:value=text_value
                    on:input=move |ev| {
                        apply_change.with_value(|f| f(key.clone(), FieldEvent::Value(event_target_value(&ev))));
                    }
                />
            }
            .into_any()
        }
        WidgetKind::Textarea => view! {
            <textarea
                class="schema-form__input schema-form__input--textarea"
                placeholder=placeholder
                prop:value=text_value
                on:input=move |ev| {
                    apply_change.with_value(|f| f(key.clone(), FieldEvent::Value(event_target_value(&ev))));
                }
            ></textarea>
        }
        .into_any(),
        WidgetKind::Select | WidgetKind::Autocomplete => {
            let options = desc.options.clone();
            let list_id = format!("options-{key}");
            if kind == WidgetKind::Select {
                view! {
                    <select
                        class="schema-form__input"
                        prop:value=text_value
                        on:change=move |ev| {
                            apply_change.with_value(|f| f(key.clone(), FieldEvent::Value(event_target_value(&ev))));
                        }
                    >
                        <option value="">{placeholder}</option>
                        {options
                            .into_iter()
                            .map(|opt| view! { <option value=opt.clone()>{opt.clone()}</option> })
                            .collect_view()}
                    </select>
                }
                .into_any()
            } else {
                view! {
                    <input
                        class="schema-form__input"
                        type="text"
                        placeholder=placeholder
                        list=list_id.clone()
                        prop:value=text_value
                        on:input=move |ev| {
                            apply_change.with_value(|f| f(key.clone(), FieldEvent::Value(event_target_value(&ev))));
                        }
                    />
                    <datalist id=list_id>
                        {options
                            .into_iter()
                            .map(|opt| view! { <option value=opt.clone()>{opt.clone()}</option> })
                            .collect_view()}
                    </datalist>
                }
                .into_any()
            }
        }
        WidgetKind::Radio => {
            let options = desc.options.clone();
            let group = key.clone();
            view! {
                <div class="schema-form__radio-group">
                    {options
                        .into_iter()
                        .map(|opt| {
                            let key = key.clone();
                            let opt_value = opt.clone();
                            let checked = {
                                let key = key.clone();
                                let opt = opt.clone();
                                move || {
                                    model.with(|m| {
                                        m.values.get(&key).and_then(FieldValue::as_text).map(str::to_owned)
                                            == Some(opt.clone())
                                    })
                                }
                            };
                            view! {
                                <label class="schema-form__radio">
                                    <input
                                        type="radio"
                                        name=group.clone()
                                        prop:checked=checked
                                        on:change=move |_| {
                                            apply_change.with_value(|f| {
                                                f(key.clone(), FieldEvent::Value(opt_value.clone()));
                                            });
                                        }
                                    />
                                    {opt}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        }
        WidgetKind::Checkbox | WidgetKind::Switch => {
            let class = if kind == WidgetKind::Switch {
                "schema-form__switch"
            } else {
                "schema-form__checkbox"
            };
            view! {
                <input
                    class=class
                    type="checkbox"
                    prop:checked=bool_value
                    on:change=move |ev| {
                        apply_change.with_value(|f| {
                            f(key.clone(), FieldEvent::Checked(event_target_checked(&ev)));
                        });
                    }
                />
            }
            .into_any()
        }
        WidgetKind::Rating | WidgetKind::Slider | WidgetKind::Counter => {
            let input_type = if kind == WidgetKind::Slider { "range" } else { "number" };
            let min = desc.min.map(|m| m.to_string());
            let max = desc.max.map(|m| m.to_string());
            view! {
                <input
                    class="schema-form__input schema-form__input--numeric"
                    type=input_type
                    min=min
                    max=max
                    prop:value=text_value
                    on:input=move |ev| {
                        apply_change
                            .with_value(|f| f(key.clone(), numeric_event(event_target_value(&ev))));
                    }
                />
            }
            .into_any()
        }
        WidgetKind::MultiSelect | WidgetKind::Chip => {
            let options = desc.options.clone();
            view! {
                <div class="schema-form__chips">
                    {options
                        .into_iter()
                        .map(|opt| {
                            let key = key.clone();
                            let opt_value = opt.clone();
                            let checked = {
                                let key = key.clone();
                                let opt = opt.clone();
                                move || {
                                    model.with(|m| match m.values.get(&key) {
                                        Some(FieldValue::List(items)) => {
                                            items.iter().any(|v| v.as_text() == Some(opt.as_str()))
                                        }
                                        _ => false,
                                    })
                                }
                            };
                            view! {
                                <label class="schema-form__chip">
                                    <input
                                        type="checkbox"
                                        prop:checked=checked
                                        on:change=move |ev| {
                                            let selected = event_target_checked(&ev);
                                            let next = model.with_untracked(|m| {
                                                toggle_selection(
                                                    m.values.get(&key).unwrap_or(&FieldValue::Null),
                                                    &opt_value,
                                                    selected,
                                                )
                                            });
                                            apply_change.with_value(|f| {
                                                f(key.clone(), FieldEvent::Native(next.clone()));
                                            });
                                        }
                                    />
                                    {opt}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        }
        WidgetKind::FileInput => view! {
            <input
                class="schema-form__input"
                type="file"
                on:change=move |ev| {
                    #[cfg(feature = "hydrate")]
                    {
                        let input: web_sys::HtmlInputElement = event_target(&ev);
                        if let Some(event) = file_event(input.files()) {
                            apply_change.with_value(|f| f(key.clone(), event));
                        }
                    }
                    #[cfg(not(feature = "hydrate"))]
                    {
                        let _ = (&ev, &key);
                    }
                }
            />
        }
        .into_any(),
    }
}

/// Build the change event for a file input: one file verbatim, several as a
/// list, none at all clears the field.
#[cfg(feature = "hydrate")]
fn file_event(files: Option<web_sys::FileList>) -> Option<FieldEvent> {
    use crate::form::value::FileHandle;

    let files = files?;
    let mut handles = Vec::new();
    for i in 0..files.length() {
        if let Some(file) = files.get(i) {
            handles.push(FieldValue::File(FileHandle::from_web(file)));
        }
    }
    let event = match handles.len() {
        0 => FieldEvent::Native(FieldValue::Null),
        1 => {
            let Some(FieldValue::File(handle)) = handles.pop() else {
                return None;
            };
            FieldEvent::Native(FieldValue::File(handle))
        }
        _ => FieldEvent::Native(FieldValue::List(handles)),
    };
    Some(event)
}
