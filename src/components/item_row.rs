//! Item Row Component
//!
//! Editable quantity and unit cost with a live total.

use leptos::prelude::*;

use estimate_core::{format_cents, Item, ItemField};

use crate::store::{store_apply_input_at, use_estimate_store, EstimateStateStoreFields};

/// A single line item row, addressed by position
#[component]
pub fn ItemRow(section_index: usize, item_index: usize) -> impl IntoView {
    let store = use_estimate_store();

    let item = Memo::new(move |_| {
        store
            .estimate()
            .with(|e| e.item(section_index, item_index).cloned())
    });
    let show = move |f: fn(&Item) -> String| move || item.with(|i| i.as_ref().map(f).unwrap_or_default());

    // Inputs are seeded once; edits flow out only, so the caret never jumps
    let initial = item.get_untracked();
    let initial_quantity = initial.as_ref().map(|i| i.quantity.to_string()).unwrap_or_default();
    let initial_cost = initial.as_ref().map(|i| format_cents(i.unit_cost)).unwrap_or_default();

    let edit = move |field: ItemField, raw: String| {
        if store_apply_input_at(&store, section_index, item_index, field, &raw) {
            log::debug!("[ROW] {:?} of row {}/{} set from {:?}", field, section_index, item_index, raw);
        } else {
            log::warn!("[ROW] No item at row {}/{} to edit", section_index, item_index);
        }
    };

    view! {
        <tr>
            <td>{show(|i| i.item_type_display_name.clone())}</td>
            <td>{show(|i| i.unit.clone())}</td>
            <td>
                <input
                    type="number"
                    class="form-control"
                    value=initial_quantity
                    on:input=move |ev| edit(ItemField::Quantity, event_target_value(&ev))
                />
            </td>
            <td>
                <input
                    type="number"
                    class="form-control"
                    step="0.01"
                    value=initial_cost
                    on:input=move |ev| edit(ItemField::UnitCost, event_target_value(&ev))
                />
            </td>
            <td>"$" {show(|i| format_cents(i.total))}</td>
        </tr>
    }
}
