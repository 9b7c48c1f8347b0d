use super::*;

#[test]
fn missing_provider_message_is_stable() {
    assert_eq!(
        missing_provider_message("HomeState"),
        "HomeState context is missing: component must be nested inside <App>"
    );
}

#[test]
#[should_panic(expected = "HomeState context is missing: component must be nested inside <App>")]
fn use_home_outside_provider_panics_with_exact_message() {
    let _ = use_home();
}

#[test]
#[should_panic(expected = "AuthState context is missing")]
fn use_auth_outside_provider_panics() {
    let _ = use_auth();
}
