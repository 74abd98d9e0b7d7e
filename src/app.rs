//! Estimate Editor App
//!
//! Loads the estimate once on mount and renders one table per section.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{EstimateSummary, SectionTable};
use crate::config::AppConfig;
use crate::fetch;
use crate::store::{store_apply_load, EstimateState, EstimateStateStoreFields, LoadStatus};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(EstimateState::default());

    // Provide store to all children
    provide_context(store);

    // Load estimate on mount (no retry)
    let data_url = config.data_url;
    Effect::new(move |_| {
        let url = data_url.clone();
        spawn_local(async move {
            let result = fetch::load_estimate(&url).await;
            store_apply_load(&store, &url, result);
        });
    });

    // Sections are never inserted or removed, so positions are stable keys
    let section_count = move || store.estimate().with(|e| e.sections().len());

    view! {
        <div class="container">
            <EstimateSummary />

            <For
                each=move || 0..section_count()
                key=|index| *index
                children=move |section_index| view! { <SectionTable section_index=section_index /> }
            />

            <Show when=move || store.status().get() == LoadStatus::Ready>
                <p class="item-count">
                    {move || store.estimate().with(|e| format!("{} sections, {} items", e.sections().len(), e.item_count()))}
                </p>
            </Show>
        </div>
    }
}
