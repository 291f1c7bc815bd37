//! Hierarchical object tree navigator for the object detail page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the descendants of the object currently viewed. The tree state lives
//! in one `RwSignal<ObjectTree>` owned by this component; async loads carry
//! the tickets issued by the tree so results that land after a navigation or
//! a newer expansion are dropped instead of overwriting fresh state.
//!
//! Row bodies are plain links handled by the router, so navigating never
//! touches tree state. The chevron button stops propagation and only toggles.

#[cfg(test)]
#[path = "object_tree_test.rs"]
mod object_tree_test;

use leptos::prelude::*;

use hierarchy::{LoadPhase, ObjectId, ObjectTree, Toggle, TreeRow};
use hierarchy::endpoints::object_route;

use crate::components::back_to_parent::BackToParentButton;
use crate::state::auth::AuthState;
use crate::util::format::indent_rem;

pub const EMPTY_PLACEHOLDER: &str = "No child objects";

/// What to draw in a row's affordance slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Affordance {
    None,
    Spinner,
    Collapsed,
    Expanded,
}

impl Affordance {
    pub fn for_row(row: &TreeRow) -> Self {
        if !row.has_children {
            Self::None
        } else if row.is_loading {
            Self::Spinner
        } else if row.is_expanded {
            Self::Expanded
        } else {
            Self::Collapsed
        }
    }
}

/// CSS classes for a row.
pub fn row_class(row: &TreeRow) -> String {
    let mut class = String::from("tree-row");
    if row.is_current {
        class.push_str(" tree-row--current");
    }
    if row.load_failed {
        class.push_str(" tree-row--failed");
    }
    class
}

pub fn row_style(row: &TreeRow) -> String {
    format!("padding-left: {}rem", indent_rem(row.depth))
}

/// Body shown under the header, derived from the tree phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeBody {
    Loading,
    Failed(String),
    Empty,
    Rows(Vec<TreeRow>),
}

impl TreeBody {
    pub fn from_tree(tree: &ObjectTree) -> Self {
        match tree.phase() {
            LoadPhase::Loading => Self::Loading,
            LoadPhase::Failed(message) => Self::Failed(message.clone()),
            LoadPhase::Ready if tree.is_empty() => Self::Empty,
            LoadPhase::Ready => Self::Rows(tree.rows()),
        }
    }
}

/// Tree of child objects below `current_object_id`, with a back-to-parent
/// button in the header. Any change of `refresh` reloads the tree.
#[component]
pub fn ObjectTreeNavigator(
    #[prop(into)] current_object_id: Signal<ObjectId>,
    #[prop(into)] refresh: Signal<u32>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let tree = RwSignal::new(ObjectTree::new(current_object_id.get_untracked()));

    Effect::new(move || {
        refresh.track();
        let current = current_object_id.get();
        let Some(ticket) = tree.try_update(|t| t.open(current)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let source = auth.get_untracked().source();
            leptos::task::spawn_local(async move {
                let (loaded, parent) = futures::join!(
                    hierarchy::loader::load_children(&source, ticket.root()),
                    hierarchy::loader::resolve_parent(&source, ticket.root()),
                );
                let committed = tree.try_update(|t| {
                    let _ = t.commit_parent(&ticket, parent);
                    hierarchy::loader::commit_root_load(t, &ticket, loaded)
                });
                match committed {
                    Some(Ok(hierarchy::CommitOutcome::Stale)) => {
                        log::debug!("root list for {} arrived after navigation", ticket.root());
                    }
                    Some(Err(_)) => crate::util::auth::sign_out(auth),
                    _ => {}
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, auth);
    });

    let on_toggle = Callback::new(move |id: ObjectId| {
        let Some(toggle) = tree.try_update(|t| t.toggle(&id)) else {
            return;
        };
        let Toggle::Fetch(ticket) = toggle else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let source = auth.get_untracked().source();
            leptos::task::spawn_local(async move {
                let loaded = hierarchy::loader::load_children(&source, ticket.node()).await;
                let committed = tree.try_update(|t| hierarchy::loader::commit_expansion(t, &ticket, loaded));
                if matches!(committed, Some(Err(_))) {
                    crate::util::auth::sign_out(auth);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ticket;
    });

    view! {
        <section class="object-tree">
            <header class="object-tree__header">
                <h2 class="object-tree__title">"Child objects"</h2>
                {move || tree.with(|t| t.parent().cloned()).map(|parent| view! { <BackToParentButton parent=parent/> })}
            </header>
            <div class="object-tree__body">
                {move || match tree.with(TreeBody::from_tree) {
                    TreeBody::Loading => view! {
                        <div class="object-tree__skeleton" aria-busy="true">
                            <div class="skeleton-line skeleton-line--short"></div>
                            <div class="skeleton-line"></div>
                            <div class="skeleton-line skeleton-line--wide"></div>
                        </div>
                    }
                    .into_any(),
                    TreeBody::Failed(message) => view! { <p class="object-tree__error">{message}</p> }.into_any(),
                    TreeBody::Empty => view! { <p class="object-tree__empty">{EMPTY_PLACEHOLDER}</p> }.into_any(),
                    TreeBody::Rows(rows) => rows
                        .into_iter()
                        .map(|row| view! { <TreeRowView row=row on_toggle=on_toggle/> })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </section>
    }
}

#[component]
fn TreeRowView(row: TreeRow, on_toggle: Callback<ObjectId>) -> impl IntoView {
    let href = object_route(&row.id);
    let affordance = Affordance::for_row(&row);
    let class = row_class(&row);
    let style = row_style(&row);
    let type_label = row.object_type.label().to_owned();
    let id = row.id.clone();

    let chevron = match affordance {
        Affordance::None => view! { <span class="tree-row__spacer"></span> }.into_any(),
        Affordance::Spinner => view! { <span class="tree-row__spinner" aria-label="Loading"></span> }.into_any(),
        Affordance::Collapsed | Affordance::Expanded => {
            let expanded = affordance == Affordance::Expanded;
            let (aria_expanded, label, glyph) =
                if expanded { ("true", "Collapse", "▾") } else { ("false", "Expand", "▸") };
            view! {
                <button
                    class="tree-row__toggle"
                    type="button"
                    aria-expanded=aria_expanded
                    aria-label=label
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        on_toggle.run(id.clone());
                    }
                >
                    {glyph}
                </button>
            }
            .into_any()
        }
    };

    view! {
        <div class=class style=style>
            {chevron}
            <a class="tree-row__link" href=href>
                <span class="tree-row__name">{row.name}</span>
                <span class="tree-row__type">{type_label}</span>
            </a>
        </div>
    }
}
