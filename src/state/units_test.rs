use super::*;

fn gram() -> Unit {
    Unit {
        id: "u-g".to_owned(),
        title: "Gram".to_owned(),
        abbreviation: "g".to_owned(),
        factor: 1.0,
    }
}

#[test]
fn units_state_defaults_empty() {
    let state = UnitsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
}

#[test]
fn abbreviation_resolves_known_unit() {
    let state = UnitsState { items: vec![gram()], loading: false };
    assert_eq!(state.abbreviation("u-g"), "g");
}

#[test]
fn abbreviation_falls_back_to_id() {
    let state = UnitsState::default();
    assert_eq!(state.abbreviation("u-missing"), "u-missing");
}
