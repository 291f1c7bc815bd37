//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.
//! A rejected request anywhere signs the user out, which trips this redirect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_ROUTE: &str = "/login";

/// Whether the visitor should be sent to the login page.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.session.is_authenticated()
}

/// Redirect to `/login` whenever auth has loaded and no credential is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Drop the credential locally and on the backend.
pub fn sign_out(auth: RwSignal<AuthState>) {
    let session = auth.get_untracked().session;
    crate::util::session_storage::clear_session();
    auth.update(AuthState::sign_out);
    leptos::task::spawn_local(async move {
        crate::net::api::logout(&session).await;
    });
}
