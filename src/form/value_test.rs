use super::*;
use crate::form::schema::FieldDescriptor;

fn schema(fields: &[(&str, WidgetKind, Option<serde_json::Value>, Option<&str>)]) -> FormSchema {
    FormSchema {
        fields: fields
            .iter()
            .enumerate()
            .map(|(i, (key, kind, default, accessor))| {
                (
                    (*key).to_owned(),
                    FieldDescriptor {
                        title: (*key).to_owned(),
                        field_type: None,
                        component: *kind,
                        default_value: default.clone(),
                        placeholder: None,
                        order: u32::try_from(i).unwrap(),
                        min: None,
                        max: None,
                        col_span: None,
                        options: Vec::new(),
                        accessor: accessor.map(str::to_owned),
                    },
                )
            })
            .collect(),
        required: Vec::new(),
        columns: 1,
    }
}

// =============================================================
// type defaults
// =============================================================

#[test]
fn checkbox_like_defaults_to_false() {
    assert_eq!(type_default(WidgetKind::Checkbox), FieldValue::Bool(false));
    assert_eq!(type_default(WidgetKind::Switch), FieldValue::Bool(false));
}

#[test]
fn file_like_defaults_to_null() {
    assert_eq!(type_default(WidgetKind::FileInput), FieldValue::Null);
}

#[test]
fn everything_else_defaults_to_empty_text() {
    for kind in [
        WidgetKind::Text,
        WidgetKind::Password,
        WidgetKind::Textarea,
        WidgetKind::Select,
        WidgetKind::MultiSelect,
        WidgetKind::Radio,
        WidgetKind::Rating,
        WidgetKind::Slider,
        WidgetKind::PinInput,
        WidgetKind::Autocomplete,
        WidgetKind::Chip,
        WidgetKind::ColorInput,
        WidgetKind::Counter,
    ] {
        assert_eq!(type_default(kind), FieldValue::Text(String::new()), "{kind:?}");
    }
}

// =============================================================
// from_json
// =============================================================

#[test]
fn json_null_maps_back_to_empty_text_for_text_widgets() {
    // Inverse leg of the payload builder's '' -> null coercion.
    assert_eq!(
        from_json(WidgetKind::Text, &serde_json::Value::Null),
        FieldValue::Text(String::new())
    );
}

#[test]
fn json_null_maps_to_type_default_for_other_widgets() {
    assert_eq!(
        from_json(WidgetKind::Checkbox, &serde_json::Value::Null),
        FieldValue::Bool(false)
    );
    assert_eq!(from_json(WidgetKind::FileInput, &serde_json::Value::Null), FieldValue::Null);
}

#[test]
fn json_scalars_map_verbatim() {
    assert_eq!(
        from_json(WidgetKind::Text, &serde_json::json!("Milk")),
        FieldValue::Text("Milk".to_owned())
    );
    assert_eq!(
        from_json(WidgetKind::Counter, &serde_json::json!(1.29)),
        FieldValue::Number(1.29)
    );
    assert_eq!(
        from_json(WidgetKind::Switch, &serde_json::json!(true)),
        FieldValue::Bool(true)
    );
}

#[test]
fn json_arrays_map_to_lists() {
    assert_eq!(
        from_json(WidgetKind::MultiSelect, &serde_json::json!(["a", "b"])),
        FieldValue::List(vec![
            FieldValue::Text("a".to_owned()),
            FieldValue::Text("b".to_owned())
        ])
    );
}

// =============================================================
// fresh_values
// =============================================================

#[test]
fn fresh_values_use_descriptor_defaults() {
    let schema = schema(&[
        ("title", WidgetKind::Text, Some(serde_json::json!("Unnamed")), None),
        ("isOrganic", WidgetKind::Switch, None, None),
        ("image", WidgetKind::FileInput, None, None),
    ]);
    let values = fresh_values(&schema);
    assert_eq!(values["title"], FieldValue::Text("Unnamed".to_owned()));
    assert_eq!(values["isOrganic"], FieldValue::Bool(false));
    assert_eq!(values["image"], FieldValue::Null);
}

// =============================================================
// values_from_record
// =============================================================

#[test]
fn record_values_read_by_field_key() {
    let schema = schema(&[("title", WidgetKind::Text, None, None)]);
    let record = serde_json::json!({"title": "Pasta"});
    assert_eq!(
        values_from_record(&schema, &record)["title"],
        FieldValue::Text("Pasta".to_owned())
    );
}

#[test]
fn record_values_follow_accessor_path() {
    let schema = schema(&[(
        "budget",
        WidgetKind::Counter,
        None,
        Some("home.weeklyBudget"),
    )]);
    let record = serde_json::json!({"home": {"weeklyBudget": 80.0}});
    assert_eq!(
        values_from_record(&schema, &record)["budget"],
        FieldValue::Number(80.0)
    );
}

#[test]
fn record_values_fall_back_to_type_default_when_absent() {
    let schema = schema(&[
        ("title", WidgetKind::Text, None, None),
        ("isOrganic", WidgetKind::Switch, None, None),
    ]);
    let record = serde_json::json!({});
    let values = values_from_record(&schema, &record);
    assert_eq!(values["title"], FieldValue::Text(String::new()));
    assert_eq!(values["isOrganic"], FieldValue::Bool(false));
}

// =============================================================
// coerce_event
// =============================================================

#[test]
fn native_values_pass_through_verbatim() {
    assert_eq!(
        coerce_event(FieldEvent::Native(FieldValue::Number(4.0))),
        FieldValue::Number(4.0)
    );
    let file = FileHandle::named("photo.jpg");
    assert_eq!(
        coerce_event(FieldEvent::Native(FieldValue::File(file.clone()))),
        FieldValue::File(file)
    );
}

#[test]
fn checkbox_events_read_checked() {
    assert_eq!(coerce_event(FieldEvent::Checked(true)), FieldValue::Bool(true));
    assert_eq!(coerce_event(FieldEvent::Checked(false)), FieldValue::Bool(false));
}

#[test]
fn other_events_read_value() {
    assert_eq!(
        coerce_event(FieldEvent::Value("hello".to_owned())),
        FieldValue::Text("hello".to_owned())
    );
}

// =============================================================
// FieldValue helpers
// =============================================================

#[test]
fn blank_detection() {
    assert!(FieldValue::Null.is_blank());
    assert!(FieldValue::Text(String::new()).is_blank());
    assert!(!FieldValue::Text("x".to_owned()).is_blank());
    assert!(!FieldValue::Bool(false).is_blank());
    assert!(!FieldValue::Number(0.0).is_blank());
}

#[test]
fn empty_text_is_distinct_from_null() {
    assert!(FieldValue::Text(String::new()).is_empty_text());
    assert!(!FieldValue::Null.is_empty_text());
}
