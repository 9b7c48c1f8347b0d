use super::*;

#[test]
fn auth_state_starts_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(!state.is_admin());
}

#[test]
fn is_admin_reads_role_flag() {
    let user = User {
        id: "u1".to_owned(),
        email: "a@b.c".to_owned(),
        name: "A".to_owned(),
        is_admin: true,
        is_owner: false,
    };
    let state = AuthState { user: Some(user), loading: false };
    assert!(state.is_admin());
}
