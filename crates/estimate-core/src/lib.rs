//! Estimate Core
//!
//! Document model, parsing and recompute logic for the estimate editor.
//! No browser dependencies, so everything here is testable natively.

mod document;
mod error;
mod estimate;
mod models;
mod money;

pub use document::parse_document;
pub use error::DocumentError;
pub use estimate::{Estimate, ItemField};
pub use models::{EntityId, Item, Section};
pub use money::{format_cents, parse_quantity, parse_unit_cost, Cents};
