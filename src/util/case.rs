//! Field-name case conversion for the wire boundary.
//!
//! The server speaks snake_case while form schemas and UI field keys use
//! camelCase. Query strings and multipart part names are converted on the
//! way out; response DTOs handle their own casing via serde.

#[cfg(test)]
#[path = "case_test.rs"]
mod case_test;

/// Convert a camelCase key to snake_case.
///
/// Each uppercase letter is lowered and prefixed with an underscore unless it
/// starts the string or follows another uppercase letter (so `grossPrice`
/// becomes `gross_price` and `imageURL` becomes `image_url`).
pub fn camel_to_snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_upper = true;
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            if !prev_upper {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
            prev_upper = true;
        } else {
            out.push(ch);
            prev_upper = false;
        }
    }
    out
}

/// Read a value out of nested JSON via a dotted accessor path.
///
/// `lookup_path(record, "home.weeklyBudget")` walks object keys level by
/// level and returns `None` when any segment is missing or the parent is not
/// an object.
pub fn lookup_path<'a>(record: &'a serde_json::Value, path: &str) -> Option<&'a serde_json::Value> {
    let mut current = record;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}
