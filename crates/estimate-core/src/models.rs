//! Estimate Models
//!
//! Data structures matching the estimate document.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::money::Cents;

/// Section or item identifier. Documents use either numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        EntityId::Number(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        EntityId::Text(id.to_string())
    }
}

/// A single line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: EntityId,
    pub item_type_display_name: String,
    #[serde(default)]
    pub unit: String,
    pub quantity: i64,
    pub unit_cost: Cents,
    /// Derived: always `quantity * unit_cost` once loaded
    #[serde(default)]
    pub total: Cents,
}

impl Item {
    /// quantity * unit_cost, saturating at the i64 bounds
    pub fn computed_total(&self) -> Cents {
        self.quantity.saturating_mul(self.unit_cost)
    }

    pub fn recompute_total(&mut self) {
        self.total = self.computed_total();
    }
}

/// A named group of items, rendered as one table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Section {
    pub fn total(&self) -> Cents {
        self.items
            .iter()
            .fold(0, |sum: Cents, item| sum.saturating_add(item.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_accepts_numbers_and_strings() {
        let ids: Vec<EntityId> = serde_json::from_str(r#"[7, "sec-a"]"#).unwrap();
        assert_eq!(ids, vec![EntityId::Number(7), EntityId::from("sec-a")]);
        assert_eq!(ids[0].to_string(), "7");
        assert_eq!(ids[1].to_string(), "sec-a");
    }

    #[test]
    fn test_item_optional_fields_default() {
        let item: Item = serde_json::from_str(
            r#"{"id": 1, "item_type_display_name": "Drywall", "quantity": 2, "unit_cost": 150}"#,
        )
        .unwrap();
        assert_eq!(item.unit, "");
        assert_eq!(item.total, 0);
        assert_eq!(item.computed_total(), 300);
    }

    #[test]
    fn test_computed_total_saturates() {
        let item = Item {
            id: EntityId::Number(1),
            item_type_display_name: "Huge".to_string(),
            unit: "ea".to_string(),
            quantity: i64::MAX,
            unit_cost: 2,
            total: 0,
        };
        assert_eq!(item.computed_total(), i64::MAX);
    }
}
