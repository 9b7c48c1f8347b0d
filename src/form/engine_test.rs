use super::*;
use crate::form::schema::FieldDescriptor;

fn schema() -> FormSchema {
    let field = |kind: WidgetKind, order: u32| FieldDescriptor {
        title: "Field".to_owned(),
        field_type: None,
        component: kind,
        default_value: None,
        placeholder: None,
        order,
        min: None,
        max: None,
        col_span: None,
        options: Vec::new(),
        accessor: None,
    };
    FormSchema {
        fields: [
            ("title".to_owned(), field(WidgetKind::Text, 1)),
            ("grossPrice".to_owned(), field(WidgetKind::Counter, 2)),
            ("isOrganic".to_owned(), field(WidgetKind::Switch, 3)),
        ]
        .into_iter()
        .collect(),
        required: vec!["title".to_owned()],
        columns: 1,
    }
}

// =============================================================
// FormModel lifecycle
// =============================================================

#[test]
fn fresh_model_starts_initial_with_type_defaults() {
    let model = FormModel::fresh(schema());
    assert_eq!(model.loading, LoadingState::Initial);
    assert_eq!(model.values["title"], FieldValue::Text(String::new()));
    assert_eq!(model.values["isOrganic"], FieldValue::Bool(false));
    assert!(model.errors.is_empty());
}

#[test]
fn editing_model_reads_record() {
    let record = serde_json::json!({"title": "Milk", "grossPrice": 1.29, "isOrganic": true});
    let model = FormModel::editing(schema(), &record);
    assert_eq!(model.values["title"], FieldValue::Text("Milk".to_owned()));
    assert_eq!(model.values["grossPrice"], FieldValue::Number(1.29));
    assert_eq!(model.values["isOrganic"], FieldValue::Bool(true));
}

#[test]
fn set_field_overwrites_value() {
    let mut model = FormModel::fresh(schema());
    model.set_field("title", FieldEvent::Value("Oats".to_owned()));
    assert_eq!(model.values["title"], FieldValue::Text("Oats".to_owned()));
    model.set_field("isOrganic", FieldEvent::Checked(true));
    assert_eq!(model.values["isOrganic"], FieldValue::Bool(true));
}

#[test]
fn validate_counts_errors_and_stores_map() {
    let mut model = FormModel::fresh(schema());
    assert_eq!(model.validate(), 1);
    assert_eq!(
        model.error_for("title").as_deref(),
        Some("Must not be empty")
    );
    model.set_field("title", FieldEvent::Value("Oats".to_owned()));
    assert_eq!(model.validate(), 0);
    assert!(model.errors.is_empty());
}

#[test]
fn merge_server_errors_overlays_local_map() {
    let mut model = FormModel::fresh(schema());
    model.validate();
    model.merge_server_errors(vec![("grossPrice".to_owned(), "is not a number".to_owned())]);
    assert_eq!(model.error_for("grossPrice").as_deref(), Some("is not a number"));
    // Local error is still present.
    assert!(model.error_for("title").is_some());
}

#[test]
fn error_presence_and_text_are_independent_repeatable_lookups() {
    let mut model = FormModel::fresh(schema());
    model.validate();
    // A rendered field queries presence and message separately, and does so
    // on every rerender.
    for _ in 0..3 {
        assert!(model.errors.contains_key("title"));
        assert_eq!(model.error_for("title").as_deref(), Some("Must not be empty"));
    }
    assert!(!model.errors.contains_key("grossPrice"));
    assert_eq!(model.error_for("grossPrice"), None);
}

#[test]
fn default_encoding_is_json() {
    let model = FormModel::fresh(schema());
    assert_eq!(model.encoding, Encoding::Json);
    let model = model.with_encoding(Encoding::Multipart);
    assert_eq!(model.encoding, Encoding::Multipart);
}

// =============================================================
// widget event helpers
// =============================================================

#[test]
fn numeric_event_parses_numbers_verbatim() {
    assert_eq!(
        numeric_event("1.5".to_owned()),
        FieldEvent::Native(FieldValue::Number(1.5))
    );
}

#[test]
fn numeric_event_keeps_unparsable_input_as_text() {
    assert_eq!(
        numeric_event("abc".to_owned()),
        FieldEvent::Value("abc".to_owned())
    );
    assert_eq!(numeric_event(String::new()), FieldEvent::Value(String::new()));
}

#[test]
fn toggle_selection_adds_and_removes_options() {
    let empty = FieldValue::Text(String::new());
    let one = toggle_selection(&empty, "vegan", true);
    assert_eq!(one, FieldValue::List(vec![FieldValue::Text("vegan".to_owned())]));
    let two = toggle_selection(&one, "quick", true);
    let back = toggle_selection(&two, "vegan", false);
    assert_eq!(back, FieldValue::List(vec![FieldValue::Text("quick".to_owned())]));
}

#[test]
fn toggle_selection_is_idempotent() {
    let one = FieldValue::List(vec![FieldValue::Text("vegan".to_owned())]);
    assert_eq!(toggle_selection(&one, "vegan", true), one);
    let none = toggle_selection(&FieldValue::List(Vec::new()), "vegan", false);
    assert_eq!(none, FieldValue::List(Vec::new()));
}

#[test]
fn loading_state_defaults_to_initial() {
    assert_eq!(LoadingState::default(), LoadingState::Initial);
}
