//! Object detail page: breadcrumbs, info card, edit actions, and the
//! child-object tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route `/objects/:id`. The page loads the object and its ancestor path for
//! the header; the tree navigator below runs its own loads keyed on the same
//! id, so following a tree link re-targets both without a remount. A
//! successful edit bumps `revision`, which reloads both.

#[cfg(test)]
#[path = "object_details_test.rs"]
mod object_details_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use hierarchy::endpoints::object_route;
use hierarchy::{ObjectId, SourceError};

use crate::components::object_actions::ObjectActions;
use crate::components::object_info::ObjectInfoCard;
use crate::components::object_tree::ObjectTreeNavigator;
use crate::components::top_bar::TopBar;
use crate::state::auth::AuthState;
use crate::state::object_details::{Crumb, ObjectDetailsState};
use crate::state::toast::ToastState;
use crate::util::auth::install_unauth_redirect;

/// User-facing message for a failed object lookup.
pub fn detail_error_message(err: &SourceError) -> String {
    match err {
        SourceError::NotFound(_) => "Object not found".to_owned(),
        SourceError::Unauthorized => "Your session has expired".to_owned(),
        _ => "Could not load the object".to_owned(),
    }
}

#[component]
pub fn ObjectDetailsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    install_unauth_redirect(auth, use_navigate());

    let params = use_params_map();
    let object_id = Memo::new(move |_| ObjectId::new(params.with(|p| p.get("id").unwrap_or_default())));
    let details = RwSignal::new(ObjectDetailsState::default());
    let session = Memo::new(move |_| auth.with(AuthState::ready_session));
    let revision = RwSignal::new(0_u32);
    let on_changed = Callback::new(move |()| revision.update(|n| *n = n.wrapping_add(1)));

    Effect::new(move || {
        revision.track();
        let id = object_id.get();
        let Some(session) = session.get() else {
            return;
        };
        details.update(|d| d.open(id.clone()));
        #[cfg(feature = "hydrate")]
        {
            use hierarchy::ObjectSource as _;

            let source = crate::net::source::HttpObjectSource::new(session);
            leptos::task::spawn_local(async move {
                let (object, ancestry) = futures::join!(source.get_object(&id), source.ancestry(&id));
                if !details.with_untracked(|d| d.is_current(&id)) {
                    log::debug!("details for {id} arrived after navigation");
                    return;
                }
                match object {
                    Ok(object) => {
                        let ancestry = ancestry.map_err(|err| log::debug!("path lookup for {id} failed: {err}")).ok();
                        details.update(|d| d.finish_load(object, ancestry));
                    }
                    Err(err) => {
                        log::warn!("loading object {id} failed: {err}");
                        let message = detail_error_message(&err);
                        toasts.update(|t| {
                            t.error(message.clone());
                        });
                        details.update(|d| d.fail_load(message));
                        if err.is_unauthorized() {
                            crate::util::auth::sign_out(auth);
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, session, toasts);
    });

    view! {
        <div class="object-page">
            <TopBar/>
            <main class="object-page__content">
                {move || {
                    let state = details.get();
                    if let Some(error) = state.error {
                        view! {
                            <div class="object-page__error">
                                <p>{error}</p>
                                <a class="object-page__back" href="/objects">"Back to objects"</a>
                            </div>
                        }
                        .into_any()
                    } else if let Some(object) = state.object {
                        view! {
                            <Breadcrumbs crumbs=state.breadcrumbs/>
                            <h1 class="object-page__title">{object.name.clone()}</h1>
                            <ObjectInfoCard object=object.clone()/>
                            <ObjectActions object=object on_changed=on_changed/>
                        }
                        .into_any()
                    } else {
                        view! { <div class="object-page__spinner" aria-busy="true"></div> }.into_any()
                    }
                }}
                <Show when=move || details.with(|d| d.error.is_none())>
                    <ObjectTreeNavigator current_object_id=object_id refresh=revision/>
                </Show>
            </main>
        </div>
    }
}

#[component]
fn Breadcrumbs(crumbs: Vec<Crumb>) -> impl IntoView {
    view! {
        <nav class="breadcrumbs" aria-label="Breadcrumb">
            <a class="breadcrumbs__item" href="/objects">"Objects"</a>
            {crumbs
                .into_iter()
                .map(|crumb| {
                    if crumb.is_current {
                        view! { <span class="breadcrumbs__item breadcrumbs__item--current">{crumb.name}</span> }
                            .into_any()
                    } else {
                        view! { <a class="breadcrumbs__item" href=object_route(&crumb.id)>{crumb.name}</a> }.into_any()
                    }
                })
                .collect_view()}
        </nav>
    }
}
