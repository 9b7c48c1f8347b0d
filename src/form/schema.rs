//! Server-declared form schemas.
//!
//! DESIGN
//! ======
//! A form is a map from field key to descriptor plus a `required` list and a
//! column layout hint. The `component` string in each descriptor must name
//! one of the widget kinds enumerated here; anything else fails
//! deserialization, so an out-of-date client rejects a schema at ingest
//! instead of rendering a half-broken form.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The closed set of widgets the engine can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    Text,
    Password,
    Textarea,
    Select,
    MultiSelect,
    Checkbox,
    Switch,
    Radio,
    Rating,
    Slider,
    PinInput,
    FileInput,
    Autocomplete,
    Chip,
    ColorInput,
    Counter,
}

impl WidgetKind {
    /// Every supported kind, in declaration order. Used by the registry
    /// sanity check and by tests.
    pub const ALL: [WidgetKind; 16] = [
        WidgetKind::Text,
        WidgetKind::Password,
        WidgetKind::Textarea,
        WidgetKind::Select,
        WidgetKind::MultiSelect,
        WidgetKind::Checkbox,
        WidgetKind::Switch,
        WidgetKind::Radio,
        WidgetKind::Rating,
        WidgetKind::Slider,
        WidgetKind::PinInput,
        WidgetKind::FileInput,
        WidgetKind::Autocomplete,
        WidgetKind::Chip,
        WidgetKind::ColorInput,
        WidgetKind::Counter,
    ];

    /// Widgets whose fresh-form default is `false` rather than `''`.
    pub fn is_checkbox_like(self) -> bool {
        matches!(self, WidgetKind::Checkbox | WidgetKind::Switch)
    }

    /// Widgets whose fresh-form default is `null` rather than `''`.
    pub fn is_file_like(self) -> bool {
        matches!(self, WidgetKind::FileInput)
    }

    /// Widgets whose value is a numeric scalar.
    pub fn is_numeric(self) -> bool {
        matches!(self, WidgetKind::Rating | WidgetKind::Slider | WidgetKind::Counter)
    }

    /// Widgets holding a list of selections.
    pub fn is_multi(self) -> bool {
        matches!(self, WidgetKind::MultiSelect | WidgetKind::Chip)
    }
}

/// One field of a server-declared form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Label shown next to the control.
    pub title: String,
    /// Wire type hint (`string`, `number`, ...); informational only.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    /// Widget used to render the field.
    pub component: WidgetKind,
    /// Initial value for fresh forms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Render position; fields are sorted ascending by this.
    pub order: u32,
    /// Minimum numeric value, or minimum length for text widgets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Maximum numeric value, or maximum length for text widgets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Grid columns this field spans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_span: Option<u8>,
    /// Allowed choices for select/radio/autocomplete widgets.
    #[serde(default, rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Dotted accessor path overriding the field key when populating from an
    /// existing record (wire format and UI key sometimes disagree).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessor: Option<String>,
}

/// A complete form declaration, keyed server-side by a form-schema id such
/// as `product.create`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    pub fields: BTreeMap<String, FieldDescriptor>,
    #[serde(default)]
    pub required: Vec<String>,
    /// Grid columns the layout engine should use.
    #[serde(default = "default_columns")]
    pub columns: u8,
}

fn default_columns() -> u8 {
    1
}

impl FormSchema {
    /// Field keys sorted by the descriptors' `order`, ties broken by key so
    /// rendering is deterministic.
    pub fn ordered_keys(&self) -> Vec<String> {
        let mut keys: Vec<&String> = self.fields.keys().collect();
        keys.sort_by_key(|k| (self.fields[*k].order, (*k).clone()));
        keys.into_iter().cloned().collect()
    }

    pub fn is_required(&self, key: &str) -> bool {
        self.required.iter().any(|r| r == key)
    }
}
