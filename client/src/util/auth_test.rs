use super::*;
use hierarchy::{ObjectId, Session, UserInfo};

#[test]
fn should_redirect_unauth_when_not_loading_and_session_missing() {
    let state = AuthState { session: Session::anonymous(), user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { session: Session::anonymous(), user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_session_exists() {
    let state = AuthState {
        session: Session::with_token("jwt"),
        user: Some(UserInfo {
            id: ObjectId::from(1),
            username: "alice".to_owned(),
            email: String::new(),
            first_name: "Alice".to_owned(),
            last_name: String::new(),
            roles: "USER".to_owned(),
            active: true,
        }),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn token_without_resolved_user_is_still_signed_in() {
    let state = AuthState { session: Session::with_token("jwt"), user: None, loading: false };
    assert!(!should_redirect_unauth(&state));
}
