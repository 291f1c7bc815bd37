//! Edit panel on the object detail page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Add a child, rename, delete, and assign or remove the responsible user.
//! Form rules and toast wording live in `state::object_actions`; this
//! component owns the inputs and issues the requests. `on_changed` asks the
//! page to reload the object and its tree after a successful edit.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use hierarchy::{ObjectId, ObjectType, RealEstateObject, SourceError};

use crate::net::source::HttpObjectSource;
use crate::state::auth::AuthState;
use crate::state::object_actions::{
    ObjectAction, after_delete_route, assign_target, child_draft, delete_prompt, rename_draft, responsible_choices,
};
use crate::state::toast::ToastState;

/// Signals every action touches.
#[derive(Clone, Copy)]
struct ActionContext {
    auth: RwSignal<AuthState>,
    toasts: RwSignal<ToastState>,
    busy: RwSignal<bool>,
}

impl ActionContext {
    fn reject(self, message: String) {
        self.toasts.update(|t| {
            t.error(message);
        });
    }

    /// Run one request at a time; `after` only runs on success.
    fn run<F, Fut>(self, action: ObjectAction, call: F, after: impl FnOnce() + 'static)
    where
        F: FnOnce(HttpObjectSource) -> Fut + 'static,
        Fut: Future<Output = Result<(), SourceError>> + 'static,
    {
        if self.busy.get_untracked() {
            return;
        }
        let source = self.auth.get_untracked().source();
        #[cfg(feature = "hydrate")]
        {
            self.busy.set(true);
            leptos::task::spawn_local(async move {
                let result = call(source).await;
                self.busy.set(false);
                match result {
                    Ok(()) => {
                        self.toasts.update(|t| {
                            t.success(action.success_message());
                        });
                        after();
                    }
                    Err(err) => {
                        log::warn!("{action:?} failed: {err}");
                        self.reject(action.failure_message(&err));
                        if err.is_unauthorized() {
                            crate::util::auth::sign_out(self.auth);
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (action, call, after, source);
    }
}

fn confirm_delete(object: &RealEstateObject) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(&delete_prompt(object)).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delete_prompt(object);
        false
    }
}

#[component]
pub fn ObjectActions(object: RealEstateObject, on_changed: Callback<()>) -> impl IntoView {
    let ctx = ActionContext {
        auth: expect_context::<RwSignal<AuthState>>(),
        toasts: expect_context::<RwSignal<ToastState>>(),
        busy: RwSignal::new(false),
    };
    let navigate = use_navigate();
    let has_responsible = object.responsible_user_id.is_some();
    let rename_value = RwSignal::new(object.name.clone());
    let child_name = RwSignal::new(String::new());
    let child_type = RwSignal::new(String::new());
    let selected_user = RwSignal::new(String::new());
    let users = RwSignal::new(Vec::<(ObjectId, String)>::new());
    let object = StoredValue::new(object);

    let session = Memo::new(move |_| ctx.auth.with(AuthState::ready_session));
    Effect::new(move || {
        let Some(session) = session.get() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match HttpObjectSource::new(session).list_users().await {
                Ok(list) => users.set(responsible_choices(&list)),
                Err(err) => log::debug!("user list unavailable: {err}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, users);
    });

    let on_add_child = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = object.with_value(|o| child_draft(o, &child_name.get_untracked(), &child_type.get_untracked()));
        match draft {
            Ok(draft) => ctx.run(
                ObjectAction::AddChild,
                move |source| async move { source.create_object(&draft).await },
                move || {
                    child_name.set(String::new());
                    on_changed.run(());
                },
            ),
            Err(message) => ctx.reject(message),
        }
    };

    let on_rename = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = object.with_value(|o| o.id.clone());
        match object.with_value(|o| rename_draft(o, &rename_value.get_untracked())) {
            Ok(update) => ctx.run(
                ObjectAction::Rename,
                move |source| async move { source.update_object(&id, &update).await },
                move || on_changed.run(()),
            ),
            Err(message) => ctx.reject(message),
        }
    };

    let on_delete = move |_| {
        if !object.with_value(confirm_delete) {
            return;
        }
        let id = object.with_value(|o| o.id.clone());
        let target = object.with_value(after_delete_route);
        let navigate = navigate.clone();
        ctx.run(
            ObjectAction::Delete,
            move |source| async move { source.delete_object(&id).await },
            move || navigate(&target, NavigateOptions::default()),
        );
    };

    let on_assign = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = object.with_value(|o| o.id.clone());
        match assign_target(&selected_user.get_untracked()) {
            Ok(user_id) => ctx.run(
                ObjectAction::AssignResponsible,
                move |source| async move { source.assign_responsible(&id, &user_id).await },
                move || on_changed.run(()),
            ),
            Err(message) => ctx.reject(message),
        }
    };

    let on_unassign = move |_| {
        let id = object.with_value(|o| o.id.clone());
        ctx.run(
            ObjectAction::RemoveResponsible,
            move |source| async move { source.remove_responsible(&id).await },
            move || on_changed.run(()),
        );
    };

    let busy = ctx.busy;

    view! {
        <section class="object-actions">
            <h2 class="object-actions__title">"Actions"</h2>
            <form class="object-actions__form" on:submit=on_rename>
                <input
                    class="object-actions__input"
                    type="text"
                    aria-label="Name"
                    prop:value=move || rename_value.get()
                    on:input=move |ev| rename_value.set(event_target_value(&ev))
                />
                <button class="object-actions__button" type="submit" disabled=move || busy.get()>
                    "Rename"
                </button>
            </form>
            <form class="object-actions__form" on:submit=on_add_child>
                <input
                    class="object-actions__input"
                    type="text"
                    placeholder="New child name"
                    prop:value=move || child_name.get()
                    on:input=move |ev| child_name.set(event_target_value(&ev))
                />
                <select
                    class="object-actions__select"
                    aria-label="Type"
                    prop:value=move || child_type.get()
                    on:change=move |ev| child_type.set(event_target_value(&ev))
                >
                    <option value="">"Type"</option>
                    {ObjectType::KNOWN
                        .iter()
                        .map(|kind| view! { <option value=kind.code().to_owned()>{kind.label().to_owned()}</option> })
                        .collect_view()}
                </select>
                <button class="object-actions__button" type="submit" disabled=move || busy.get()>
                    "Add child"
                </button>
            </form>
            <form class="object-actions__form" on:submit=on_assign>
                <select
                    class="object-actions__select"
                    aria-label="Responsible user"
                    prop:value=move || selected_user.get()
                    on:change=move |ev| selected_user.set(event_target_value(&ev))
                >
                    <option value="">"Responsible user"</option>
                    {move || {
                        users
                            .get()
                            .into_iter()
                            .map(|(id, name)| view! { <option value=id.to_string()>{name}</option> })
                            .collect_view()
                    }}
                </select>
                <button class="object-actions__button" type="submit" disabled=move || busy.get()>
                    "Assign"
                </button>
                {has_responsible
                    .then(|| {
                        view! {
                            <button
                                class="object-actions__button"
                                type="button"
                                disabled=move || busy.get()
                                on:click=on_unassign
                            >
                                "Remove responsible"
                            </button>
                        }
                    })}
            </form>
            <button
                class="object-actions__button object-actions__button--danger"
                type="button"
                disabled=move || busy.get()
                on:click=on_delete
            >
                "Delete object"
            </button>
        </section>
    }
}
