use super::*;

fn user() -> UserInfo {
    UserInfo {
        id: hierarchy::ObjectId::from(5),
        username: "olga".to_owned(),
        email: "olga@example.com".to_owned(),
        first_name: "Olga".to_owned(),
        last_name: "Smirnova".to_owned(),
        roles: "ADMIN".to_owned(),
        active: true,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.session.is_authenticated());
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
    assert!(AuthState::pending().loading);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn sign_out_clears_credential_and_user() {
    let mut state = AuthState { session: Session::with_token("tok"), user: Some(user()), loading: true };
    state.sign_out();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert_eq!(state.session, Session::anonymous());
}

#[test]
fn source_carries_session() {
    let state = AuthState { session: Session::with_token("tok"), user: None, loading: false };
    assert_eq!(state.source().session(), &Session::with_token("tok"));
}

#[test]
fn display_name_prefers_full_name() {
    let state = AuthState { session: Session::with_token("tok"), user: Some(user()), loading: false };
    assert_eq!(state.display_name(), "Olga Smirnova");
    assert_eq!(AuthState::default().display_name(), "me");
}

#[test]
fn ready_session_waits_for_loading_and_credential() {
    let mut state = AuthState { session: Session::with_token("tok"), user: None, loading: true };
    assert_eq!(state.ready_session(), None);
    state.loading = false;
    assert_eq!(state.ready_session(), Some(Session::with_token("tok")));
    state.sign_out();
    assert_eq!(state.ready_session(), None);
}
