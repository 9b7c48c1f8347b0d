//! Client-side validation of form values against the schema.
//!
//! DESIGN
//! ======
//! Errors are a field-keyed map of human-readable messages, sentence-cased
//! (first letter upper, remainder lower) before they reach the UI. When no
//! data object exists at all, every `required` field gets the fixed
//! "must not be empty" message and the per-field checks are skipped
//! entirely.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::BTreeMap;

use crate::form::schema::{FieldDescriptor, FormSchema};
use crate::form::value::{FieldValue, FormValues};

/// Raw message for a missing required value.
pub const REQUIRED_MESSAGE: &str = "must not be empty";

/// Field-keyed validation errors.
pub type FieldErrors = BTreeMap<String, String>;

/// Sentence-case a raw message: first letter upper, the rest lower.
pub fn sentence_case(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Validate `data` against `schema`, returning the error map.
///
/// `data = None` means no data object exists yet; in that case every
/// required field is pre-populated with [`REQUIRED_MESSAGE`] instead of
/// running the field checks.
pub fn validate(schema: &FormSchema, data: Option<&FormValues>) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let Some(data) = data else {
        for key in &schema.required {
            errors.insert(key.clone(), sentence_case(REQUIRED_MESSAGE));
        }
        return errors;
    };

    for (key, desc) in &schema.fields {
        let value = data.get(key).cloned().unwrap_or(FieldValue::Null);
        if schema.is_required(key) && value.is_blank() {
            errors.insert(key.clone(), sentence_case(REQUIRED_MESSAGE));
            continue;
        }
        if let Some(message) = check_field(desc, &value) {
            errors.insert(key.clone(), sentence_case(&message));
        }
    }
    errors
}

/// Per-field checks beyond required-ness. Blank optional values pass.
fn check_field(desc: &FieldDescriptor, value: &FieldValue) -> Option<String> {
    if value.is_blank() {
        return None;
    }
    match value {
        FieldValue::Number(n) => {
            if let Some(min) = desc.min {
                if *n < min {
                    return Some(format!("must be at least {min}"));
                }
            }
            if let Some(max) = desc.max {
                if *n > max {
                    return Some(format!("must be at most {max}"));
                }
            }
            None
        }
        FieldValue::Text(s) => {
            let len = s.chars().count();
            if let Some(min) = desc.min {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                if len < min.max(0.0) as usize {
                    return Some(format!("must have at least {min} characters"));
                }
            }
            if let Some(max) = desc.max {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                if len > max.max(0.0) as usize {
                    return Some(format!("must have at most {max} characters"));
                }
            }
            if !desc.options.is_empty() && !desc.options.iter().any(|o| o == s) {
                return Some("must be one of the allowed values".to_owned());
            }
            None
        }
        FieldValue::List(items) => {
            if desc.options.is_empty() {
                return None;
            }
            let stray = items.iter().any(|item| {
                item.as_text()
                    .is_some_and(|s| !desc.options.iter().any(|o| o == s))
            });
            if stray {
                Some("must be one of the allowed values".to_owned())
            } else {
                None
            }
        }
        FieldValue::Bool(_) | FieldValue::File(_) | FieldValue::Null => None,
    }
}
