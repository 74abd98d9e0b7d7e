//! Section Table Component
//!
//! One bordered table per estimate section.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::store::{use_estimate_store, EstimateStateStoreFields};

#[component]
pub fn SectionTable(section_index: usize) -> impl IntoView {
    let store = use_estimate_store();

    let name = move || {
        store.estimate().with(|e| {
            e.section(section_index)
                .map(|s| s.name.clone())
                .unwrap_or_default()
        })
    };

    // Count only changes if the item list does, so rows keep their inputs
    let item_count = move || {
        store
            .estimate()
            .with(|e| e.section(section_index).map_or(0, |s| s.items.len()))
    };

    view! {
        <div class="section">
            <h4>{name}</h4>
            <table class="table table-bordered">
                <thead>
                    <tr>
                        <th>"Item Name"</th>
                        <th>"Unit"</th>
                        <th>"Quantity"</th>
                        <th>"Unit Cost ($)"</th>
                        <th>"Total ($)"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || 0..item_count()
                        key=|index| *index
                        children=move |item_index| {
                            view! { <ItemRow section_index=section_index item_index=item_index /> }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
