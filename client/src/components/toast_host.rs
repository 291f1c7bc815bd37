//! Renders queued toasts and expires them.
//!
//! Each toast schedules its own dismissal when first rendered, so a toast
//! pushed while others are visible still gets its full lifetime.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| view! { <ToastView toast=toast/> }
            />
        </div>
    }
}

#[component]
fn ToastView(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::toast::TOAST_TTL_MS).await;
        toasts.update(|state| state.dismiss(id));
    });

    view! {
        <div class=format!("toast {}", toast.kind.class()) role="status">
            <span class="toast__message">{toast.message}</span>
            <button
                class="toast__close"
                type="button"
                aria-label="Dismiss"
                on:click=move |_| toasts.update(|state| state.dismiss(id))
            >
                "✕"
            </button>
        </div>
    }
}
