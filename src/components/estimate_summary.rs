//! Estimate Summary Component
//!
//! Page heading with the live grand total.

use leptos::prelude::*;

use estimate_core::format_cents;

use crate::store::{use_estimate_store, EstimateStateStoreFields};

#[component]
pub fn EstimateSummary() -> impl IntoView {
    let store = use_estimate_store();
    let grand_total = Memo::new(move |_| store.estimate().with(|e| e.grand_total()));

    view! {
        <div class="d-flex align-items-center py-4 justify-content-between">
            <h2>"Estimate Summary"</h2>
            <h3>"Grand Total: $" {move || format_cents(grand_total.get())}</h3>
        </div>
    }
}
