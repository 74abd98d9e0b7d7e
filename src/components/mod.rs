//! UI Components
//!
//! Leptos components for the estimate editor.

mod estimate_summary;
mod item_row;
mod section_table;

pub use estimate_summary::EstimateSummary;
pub use item_row::ItemRow;
pub use section_table::SectionTable;
