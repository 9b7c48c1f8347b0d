use super::*;
use crate::net::types::ApiStatus;

// =============================================================
// encode_query
// =============================================================

#[test]
fn encode_query_empty_pairs_gives_empty_string() {
    assert_eq!(encode_query(&[]), "");
}

#[test]
fn encode_query_converts_keys_to_snake_case() {
    assert_eq!(
        encode_query(&[("homeId", "h1".to_owned())]),
        "?home_id=h1"
    );
}

#[test]
fn encode_query_joins_pairs_with_ampersand() {
    assert_eq!(
        encode_query(&[("page", "2".to_owned()), ("perPage", "25".to_owned())]),
        "?page=2&per_page=25"
    );
}

#[test]
fn encode_query_percent_encodes_values() {
    assert_eq!(
        encode_query(&[("q", "salt & pepper".to_owned())]),
        "?q=salt%20%26%20pepper"
    );
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn status_error_display_includes_code() {
    let err = ApiError::Status { status: 422, body: None };
    assert_eq!(err.to_string(), "request failed with status 422");
}

#[test]
fn field_errors_come_from_envelope_data() {
    let env = Envelope {
        status: ApiStatus::Error,
        message: None,
        data: Some(serde_json::json!({"title": "is taken"})),
    };
    let err = ApiError::Status { status: 422, body: Some(env) };
    assert_eq!(
        err.field_errors(),
        vec![("title".to_owned(), "is taken".to_owned())]
    );
}

#[test]
fn field_errors_empty_for_network_and_decode() {
    assert!(ApiError::Network("offline".to_owned()).field_errors().is_empty());
    assert!(ApiError::Decode("bad json".to_owned()).field_errors().is_empty());
}

#[test]
fn user_message_prefers_envelope_message() {
    let env = Envelope {
        status: ApiStatus::Error,
        message: Some("title is taken".to_owned()),
        data: None,
    };
    let err = ApiError::Status { status: 409, body: Some(env) };
    assert_eq!(err.user_message(), "title is taken");
}

#[test]
fn user_message_falls_back_to_display() {
    let err = ApiError::Status { status: 500, body: None };
    assert_eq!(err.user_message(), "request failed with status 500");
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(err.user_message(), "network error: offline");
}

#[test]
fn csrf_header_name_is_stable() {
    assert_eq!(CSRF_HEADER, "X-CSRF-Token");
}
