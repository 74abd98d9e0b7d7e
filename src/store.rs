//! Estimate State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use estimate_core::{Estimate, ItemField};

/// Progress of the one-shot document load
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    /// Error already logged; the table stays empty
    Failed,
}

/// Editor state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct EstimateState {
    /// Sections and items being edited
    pub estimate: Estimate,
    pub status: LoadStatus,
}

/// Type alias for the store
pub type EstimateStore = Store<EstimateState>;

/// Get the estimate store from context
pub fn use_estimate_store() -> EstimateStore {
    expect_context::<EstimateStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the estimate after a successful load
pub fn store_set_estimate(store: &EstimateStore, estimate: Estimate) {
    *store.estimate().write() = estimate;
    *store.status().write() = LoadStatus::Ready;
}

/// Record a failed load; the estimate is left as-is (empty)
pub fn store_mark_failed(store: &EstimateStore) {
    *store.status().write() = LoadStatus::Failed;
}

/// Apply the outcome of loading `source`, logging either way
pub fn store_apply_load(store: &EstimateStore, source: &str, result: Result<Estimate, String>) {
    match result {
        Ok(estimate) => {
            log::info!(
                "[STORE] Loaded {} sections, {} items from {}",
                estimate.sections().len(),
                estimate.item_count(),
                source
            );
            store_set_estimate(store, estimate);
        }
        Err(e) => {
            log::error!("[STORE] Error loading estimate from {}: {}", source, e);
            store_mark_failed(store);
        }
    }
}

/// Apply raw input from the editor cell at a position.
///
/// Returns false when no item sits at that position.
pub fn store_apply_input_at(
    store: &EstimateStore,
    section_index: usize,
    item_index: usize,
    field: ItemField,
    raw: &str,
) -> bool {
    store
        .estimate()
        .write()
        .apply_input_at(section_index, item_index, field, raw)
}
