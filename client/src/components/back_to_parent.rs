//! Header button returning to the parent object.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use hierarchy::endpoints::object_route;
use hierarchy::ParentLink;

pub fn back_label(parent: &ParentLink) -> String {
    format!("Back to {}", parent.name)
}

#[component]
pub fn BackToParentButton(parent: ParentLink) -> impl IntoView {
    let navigate = use_navigate();
    let target = object_route(&parent.id);
    let label = back_label(&parent);
    let title = label.clone();

    view! {
        <button
            class="back-to-parent"
            type="button"
            title=title
            on:click=move |_| navigate(&target, NavigateOptions::default())
        >
            <span class="back-to-parent__chevron">"‹"</span>
            <span class="back-to-parent__label">{label}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hierarchy::ObjectId;

    #[test]
    fn label_names_parent() {
        let parent = ParentLink { id: ObjectId::from(4), name: "Block A".to_owned() };
        assert_eq!(back_label(&parent), "Back to Block A");
        assert_eq!(object_route(&parent.id), "/objects/4");
    }

    #[test]
    fn label_keeps_unicode_parent_names() {
        let parent = ParentLink { id: ObjectId::from(9), name: "Корпус 2".to_owned() };
        assert_eq!(back_label(&parent), "Back to Корпус 2");
    }
}
