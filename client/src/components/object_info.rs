//! Info card summarizing one object on its detail page.

use leptos::prelude::*;

use hierarchy::RealEstateObject;

use crate::util::format::info_items;

#[component]
pub fn ObjectInfoCard(object: RealEstateObject) -> impl IntoView {
    let items = info_items(&object);

    view! {
        <section class="object-info">
            <h2 class="object-info__title">"Object information"</h2>
            <dl class="object-info__grid">
                {items
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="object-info__item">
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
        </section>
    }
}
