//! Request payload construction for form submits.
//!
//! DESIGN
//! ======
//! Two encodings with deliberately different empty-value handling:
//!
//! - JSON coerces `''` to `null` — the server reads that as "explicitly
//!   cleared".
//! - Multipart omits blank fields entirely and converts part names to
//!   snake_case.
//!
//! Several endpoints distinguish "field absent" from "field null", so the
//! two paths must not be unified. The multipart body is built as a pure
//! entry list first; only the final `FormData` conversion touches the
//! browser.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use crate::form::value::{FieldValue, FormValues};
use crate::util::case::camel_to_snake;

/// How a form serializes its submit body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Encoding {
    #[default]
    Json,
    Multipart,
}

/// Build the JSON submit body. Field keys stay camelCase; `''` values become
/// `null`; file values are left out (files only travel multipart).
pub fn json_payload(values: &FormValues) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    for (key, value) in values {
        if matches!(value, FieldValue::File(_)) {
            continue;
        }
        map.insert(key.clone(), value_to_json(value));
    }
    serde_json::Value::Object(map)
}

fn value_to_json(value: &FieldValue) -> serde_json::Value {
    match value {
        FieldValue::Null => serde_json::Value::Null,
        FieldValue::Text(s) if s.is_empty() => serde_json::Value::Null,
        FieldValue::Text(s) => serde_json::Value::String(s.clone()),
        FieldValue::Number(n) => serde_json::json!(n),
        FieldValue::Bool(b) => serde_json::Value::Bool(*b),
        FieldValue::List(items) => serde_json::Value::Array(
            items
                .iter()
                .filter(|item| !matches!(item, FieldValue::File(_)))
                .map(value_to_json)
                .collect(),
        ),
        // Unreachable from json_payload; kept total for reuse.
        FieldValue::File(file) => serde_json::Value::String(file.name().to_owned()),
    }
}

/// One part of a multipart body.
#[derive(Clone, Debug, PartialEq)]
pub struct MultipartEntry {
    pub key: String,
    pub value: PartValue,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PartValue {
    Text(String),
    File(crate::form::value::FileHandle),
}

/// Build the multipart entry list.
///
/// Part names are snake_cased. Blank fields (`null` or `''`) are omitted —
/// not nulled like the JSON path. Array fields emit one `key[]` part per
/// element: files as file parts, everything else JSON-stringified. Booleans
/// JSON-stringify; other scalars use their string conversion.
pub fn multipart_entries(values: &FormValues) -> Vec<MultipartEntry> {
    let mut entries = Vec::new();
    for (key, value) in values {
        if value.is_blank() {
            continue;
        }
        let name = camel_to_snake(key);
        match value {
            FieldValue::List(items) => {
                let item_key = format!("{name}[]");
                for item in items {
                    match item {
                        FieldValue::File(file) => entries.push(MultipartEntry {
                            key: item_key.clone(),
                            value: PartValue::File(file.clone()),
                        }),
                        other => entries.push(MultipartEntry {
                            key: item_key.clone(),
                            value: PartValue::Text(
                                serde_json::to_string(&value_to_json(other)).unwrap_or_default(),
                            ),
                        }),
                    }
                }
            }
            FieldValue::File(file) => entries.push(MultipartEntry {
                key: name,
                value: PartValue::File(file.clone()),
            }),
            FieldValue::Bool(b) => entries.push(MultipartEntry {
                key: name,
                value: PartValue::Text(if *b { "true".to_owned() } else { "false".to_owned() }),
            }),
            FieldValue::Number(n) => entries.push(MultipartEntry {
                key: name,
                value: PartValue::Text(n.to_string()),
            }),
            FieldValue::Text(s) => entries.push(MultipartEntry {
                key: name,
                value: PartValue::Text(s.clone()),
            }),
            FieldValue::Null => {}
        }
    }
    entries
}

/// Convert the entry list into a browser `FormData`.
#[cfg(feature = "hydrate")]
pub fn to_form_data(entries: &[MultipartEntry]) -> Result<web_sys::FormData, String> {
    let form = web_sys::FormData::new().map_err(|_| "FormData is unavailable".to_owned())?;
    for entry in entries {
        let appended = match &entry.value {
            PartValue::Text(text) => form.append_with_str(&entry.key, text),
            PartValue::File(file) => {
                form.append_with_blob_and_filename(&entry.key, file.as_web(), file.name())
            }
        };
        appended.map_err(|_| format!("could not append multipart field {}", entry.key))?;
    }
    Ok(form)
}
