//! Object inventory page listing every real-estate object.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Loads the full list once the credential is
//! known; each row links to the object's detail page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use hierarchy::RealEstateObject;
use hierarchy::endpoints::object_route;

use crate::components::top_bar::TopBar;
use crate::state::auth::AuthState;
use crate::state::objects::ObjectsState;
use crate::state::toast::ToastState;
use crate::util::auth::install_unauth_redirect;
use crate::util::format::{UNKNOWN, format_date};

pub const LIST_LOAD_ERROR: &str = "Could not load objects";

#[component]
pub fn ObjectsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let objects = expect_context::<RwSignal<ObjectsState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(auth, use_navigate());

    let session = Memo::new(move |_| auth.with(AuthState::ready_session));
    Effect::new(move || {
        let Some(session) = session.get() else {
            return;
        };
        objects.update(ObjectsState::begin_load);
        #[cfg(feature = "hydrate")]
        {
            let source = crate::net::source::HttpObjectSource::new(session);
            leptos::task::spawn_local(async move {
                match source.list_objects().await {
                    Ok(items) => objects.update(|s| s.finish_load(items)),
                    Err(err) => {
                        log::warn!("object list failed: {err}");
                        objects.update(|s| s.fail_load(LIST_LOAD_ERROR));
                        toasts.update(|t| {
                            t.error(LIST_LOAD_ERROR);
                        });
                        if err.is_unauthorized() {
                            crate::util::auth::sign_out(auth);
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, toasts);
    });

    view! {
        <div class="objects-page">
            <TopBar/>
            <main class="objects-page__content">
                <h1 class="objects-page__title">"Objects"</h1>
                {move || {
                    let state = objects.get();
                    if state.loading {
                        view! { <p class="objects-page__loading">"Loading..."</p> }.into_any()
                    } else if let Some(error) = state.error {
                        view! { <p class="objects-page__error">{error}</p> }.into_any()
                    } else if state.items.is_empty() {
                        view! { <p class="objects-page__empty">"No objects yet"</p> }.into_any()
                    } else {
                        let caption = state.summary();
                        view! {
                            <p class="objects-page__summary">{caption}</p>
                            <table class="objects-table">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Type"</th>
                                        <th>"Created"</th>
                                        <th>"Created by"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {state.items.into_iter().map(|object| view! { <ObjectRow object=object/> }).collect_view()}
                                </tbody>
                            </table>
                        }
                        .into_any()
                    }
                }}
            </main>
        </div>
    }
}

#[component]
fn ObjectRow(object: RealEstateObject) -> impl IntoView {
    let href = object_route(&object.id);
    let nested = object.parent_id.is_some();
    let created = format_date(object.created_at.as_deref());
    let creator = object.created_by_name().unwrap_or_else(|| UNKNOWN.to_owned());
    let type_label = object.object_type.label().to_owned();

    view! {
        <tr class="objects-table__row" class:objects-table__row--nested=nested>
            <td>
                <a href=href>{object.name}</a>
            </td>
            <td>{type_label}</td>
            <td>{created}</td>
            <td>{creator}</td>
        </tr>
    }
}
