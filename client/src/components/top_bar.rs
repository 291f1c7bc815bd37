//! Top bar shared by the signed-in pages.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::toast::ToastState;

pub const SIGNED_OUT_MESSAGE: &str = "Signed out";

#[component]
pub fn TopBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_sign_out = move |_| {
        crate::util::auth::sign_out(auth);
        toasts.update(|t| {
            t.info(SIGNED_OUT_MESSAGE);
        });
    };

    view! {
        <header class="top-bar">
            <a class="top-bar__brand" href="/objects">"Objects"</a>
            <span class="top-bar__user">{move || auth.with(AuthState::display_name)}</span>
            <button class="top-bar__sign-out" type="button" on:click=on_sign_out>
                "Sign out"
            </button>
        </header>
    }
}
