//! Estimate
//!
//! The in-memory tree of sections and items, plus the edit/recompute
//! operations that keep every item total and the grand total in sync.
//!
//! Rows are addressed by position; ids are not guaranteed unique. The
//! id-based operations act on every `(section, item)` pair matching both ids.

use crate::models::{EntityId, Item, Section};
use crate::money::{parse_quantity, parse_unit_cost, Cents};

/// Editable numeric column of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Quantity,
    UnitCost,
}

impl ItemField {
    /// Coerce raw input text into the field's integer value
    pub fn parse(self, raw: &str) -> i64 {
        match self {
            ItemField::Quantity => parse_quantity(raw),
            ItemField::UnitCost => parse_unit_cost(raw),
        }
    }
}

/// Ordered sections of an estimate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Estimate {
    sections: Vec<Section>,
}

impl Estimate {
    /// Build from loaded sections, recomputing every item total
    pub fn from_sections(mut sections: Vec<Section>) -> Self {
        for section in &mut sections {
            for item in &mut section.items {
                let computed = item.computed_total();
                if item.total != computed {
                    log::warn!(
                        "item {} in section {} had total {}, recomputed to {}",
                        item.id,
                        section.id,
                        item.total,
                        computed
                    );
                    item.total = computed;
                }
            }
        }
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    pub fn section(&self, section_index: usize) -> Option<&Section> {
        self.sections.get(section_index)
    }

    pub fn item(&self, section_index: usize, item_index: usize) -> Option<&Item> {
        self.section(section_index)?.items.get(item_index)
    }

    /// `(section_index, item_index)` of every item matching both ids
    pub fn positions_of(&self, section_id: &EntityId, item_id: &EntityId) -> Vec<(usize, usize)> {
        self.sections
            .iter()
            .enumerate()
            .filter(|(_, s)| &s.id == section_id)
            .flat_map(|(si, s)| {
                s.items
                    .iter()
                    .enumerate()
                    .filter(|(_, item)| &item.id == item_id)
                    .map(move |(ii, _)| (si, ii))
            })
            .collect()
    }

    /// Every item matching both ids, in document order
    pub fn find_items<'a>(
        &'a self,
        section_id: &EntityId,
        item_id: &EntityId,
    ) -> impl Iterator<Item = &'a Item> + 'a {
        self.positions_of(section_id, item_id)
            .into_iter()
            .filter_map(move |(si, ii)| self.item(si, ii))
    }

    /// Set a field on the item at a position and recompute its total.
    ///
    /// Returns false when the position is out of range.
    pub fn set_field_at(
        &mut self,
        section_index: usize,
        item_index: usize,
        field: ItemField,
        value: i64,
    ) -> bool {
        let Some(item) = self
            .sections
            .get_mut(section_index)
            .and_then(|s| s.items.get_mut(item_index))
        else {
            return false;
        };
        match field {
            ItemField::Quantity => item.quantity = value,
            ItemField::UnitCost => item.unit_cost = value,
        }
        item.recompute_total();
        true
    }

    /// Apply raw input text from an editor cell. Unparsable input counts as 0.
    pub fn apply_input_at(
        &mut self,
        section_index: usize,
        item_index: usize,
        field: ItemField,
        raw: &str,
    ) -> bool {
        self.set_field_at(section_index, item_index, field, field.parse(raw))
    }

    /// Set a field on every item matching both ids.
    ///
    /// Returns how many items were updated.
    pub fn set_field(
        &mut self,
        section_id: &EntityId,
        item_id: &EntityId,
        field: ItemField,
        value: i64,
    ) -> usize {
        let mut updated = 0;
        for (si, ii) in self.positions_of(section_id, item_id) {
            if self.set_field_at(si, ii, field, value) {
                updated += 1;
            }
        }
        updated
    }

    /// Id-based [`Estimate::apply_input_at`]
    pub fn apply_input(
        &mut self,
        section_id: &EntityId,
        item_id: &EntityId,
        field: ItemField,
        raw: &str,
    ) -> usize {
        self.set_field(section_id, item_id, field, field.parse(raw))
    }

    /// Sum of all item totals, in minor units
    pub fn grand_total(&self) -> Cents {
        self.sections
            .iter()
            .fold(0, |sum: Cents, section| sum.saturating_add(section.total()))
    }
}
