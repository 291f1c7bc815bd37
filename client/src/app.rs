//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{login::LoginPage, object_details::ObjectDetailsPage, objects::ObjectsPage};
use crate::state::{auth::AuthState, objects::ObjectsState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Auth stays pending on the server so route guards never fire during SSR.
    let auth = RwSignal::new(AuthState::pending());
    let objects = RwSignal::new(ObjectsState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(objects);
    provide_context(toasts);

    #[cfg(feature = "hydrate")]
    restore_session(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/estate-console.css"/>
        <Title text="Property console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("objects") view=ObjectsPage/>
                <Route path=(StaticSegment("objects"), ParamSegment("id")) view=ObjectDetailsPage/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/objects"/> }/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}

/// Load the stored credential, then resolve the user behind it.
#[cfg(feature = "hydrate")]
fn restore_session(auth: RwSignal<AuthState>) {
    let session = crate::util::session_storage::load_session();
    auth.set(AuthState { session: session.clone(), user: None, loading: false });
    if !session.is_authenticated() {
        return;
    }
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user(&session).await;
        auth.update(|state| {
            if state.session == session {
                state.user = user;
            }
        });
    });
}
