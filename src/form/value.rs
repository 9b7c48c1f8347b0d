//! Field value state for the form engine.
//!
//! DESIGN
//! ======
//! Values are a field-keyed map of a small tagged union. Two population
//! paths exist: fresh forms take each descriptor's `defaultValue`, edits
//! read the existing record (optionally through a dotted accessor path).
//! Both fall back to the same type-aware defaults: `false` for
//! checkbox-like widgets, null for file-like widgets, `''` for everything
//! else.

#[cfg(test)]
#[path = "value_test.rs"]
mod value_test;

use std::collections::BTreeMap;

use crate::form::schema::{FormSchema, WidgetKind};
use crate::util::case::lookup_path;

/// A selected file. Wraps the browser `File` in the WASM build; native
/// builds carry only the name so the pure pipeline stays testable.
#[derive(Clone, Debug)]
pub struct FileHandle {
    name: String,
    #[cfg(feature = "hydrate")]
    inner: web_sys::File,
}

impl PartialEq for FileHandle {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl FileHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    #[cfg(feature = "hydrate")]
    pub fn from_web(file: web_sys::File) -> Self {
        Self { name: file.name(), inner: file }
    }

    #[cfg(feature = "hydrate")]
    pub fn as_web(&self) -> &web_sys::File {
        &self.inner
    }

    #[cfg(not(feature = "hydrate"))]
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The value of one form field.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FieldValue {
    #[default]
    Null,
    Text(String),
    Number(f64),
    Bool(bool),
    File(FileHandle),
    List(Vec<FieldValue>),
}

impl FieldValue {
    /// True for `''`, the "explicitly cleared" marker.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.is_empty())
    }

    /// True when the field carries nothing the server should see.
    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Null) || self.is_empty_text()
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// The field-keyed value map held by a running form.
pub type FormValues = BTreeMap<String, FieldValue>;

/// Type-aware default for a widget kind.
pub fn type_default(kind: WidgetKind) -> FieldValue {
    if kind.is_checkbox_like() {
        FieldValue::Bool(false)
    } else if kind.is_file_like() {
        FieldValue::Null
    } else {
        FieldValue::Text(String::new())
    }
}

/// Convert a JSON value into a field value for the given widget.
///
/// JSON `null` resolves to the widget's type-aware default, so a server-side
/// `null` in a text field renders as `''` again (the inverse leg of the
/// payload builder's `''` → `null` coercion).
pub fn from_json(kind: WidgetKind, value: &serde_json::Value) -> FieldValue {
    match value {
        serde_json::Value::Null => type_default(kind),
        serde_json::Value::Bool(b) => FieldValue::Bool(*b),
        serde_json::Value::Number(n) => FieldValue::Number(n.as_f64().unwrap_or(0.0)),
        serde_json::Value::String(s) => FieldValue::Text(s.clone()),
        serde_json::Value::Array(items) => {
            FieldValue::List(items.iter().map(|v| from_json(kind, v)).collect())
        }
        // Nested objects have no widget representation.
        serde_json::Value::Object(_) => type_default(kind),
    }
}

/// Initial values for a fresh form: descriptor defaults, else type defaults.
pub fn fresh_values(schema: &FormSchema) -> FormValues {
    schema
        .fields
        .iter()
        .map(|(key, desc)| {
            let value = desc
                .default_value
                .as_ref()
                .map_or_else(|| type_default(desc.component), |v| from_json(desc.component, v));
            (key.clone(), value)
        })
        .collect()
}

/// Initial values when editing an existing record.
///
/// Each field reads from the record at its own key, or at the descriptor's
/// dotted `accessor` path when set, falling back to the type default when
/// the record has nothing there.
pub fn values_from_record(schema: &FormSchema, record: &serde_json::Value) -> FormValues {
    schema
        .fields
        .iter()
        .map(|(key, desc)| {
            let path = desc.accessor.as_deref().unwrap_or(key);
            let value = lookup_path(record, path)
                .map_or_else(|| type_default(desc.component), |v| from_json(desc.component, v));
            (key.clone(), value)
        })
        .collect()
}

/// Raw change notification from a rendered widget.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldEvent {
    /// A native String/Number/File value, taken verbatim.
    Native(FieldValue),
    /// A checkbox-like DOM event; the value comes from `checked`.
    Checked(bool),
    /// Any other DOM event; the value comes from `value`.
    Value(String),
}

/// Resolve a widget change notification into the stored field value.
pub fn coerce_event(event: FieldEvent) -> FieldValue {
    match event {
        FieldEvent::Native(value) => value,
        FieldEvent::Checked(checked) => FieldValue::Bool(checked),
        FieldEvent::Value(value) => FieldValue::Text(value),
    }
}
