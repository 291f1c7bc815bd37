//! Login page: username + password against the property backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the credential is persisted at the app edge and the auth state
//! is switched to signed in; the visitor then lands on the object list.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

pub const AFTER_LOGIN_ROUTE: &str = "/objects";

/// Trimmed username and password, or the message to show.
///
/// # Errors
///
/// Returns a user-facing message when either field is blank.
pub fn validate_login_input(username: &str, password: &str) -> Result<(String, String), String> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Enter your username.".to_owned());
    }
    if password.is_empty() {
        return Err("Enter your password.".to_owned());
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: skip the form.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.session.is_authenticated() {
            navigate(AFTER_LOGIN_ROUTE, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user_value, pass_value) = match validate_login_input(&username.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message);
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&user_value, &pass_value).await {
                Ok(response) => {
                    let session = response.session();
                    crate::util::session_storage::store_session(&session, response.refresh_token.as_deref());
                    let user = crate::net::api::fetch_current_user(&session).await;
                    auth.set(AuthState { session, user, loading: false });
                    info.set(String::new());
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (user_value, pass_value);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Property console"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
