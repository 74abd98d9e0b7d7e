use estimate_core::{parse_document, Estimate, ItemField};
use proptest::prelude::*;
use serde_json::json;

fn document(rows: &[Vec<(i64, i64)>]) -> String {
    let sections: Vec<_> = rows
        .iter()
        .enumerate()
        .map(|(s, items)| {
            let items: Vec<_> = items
                .iter()
                .enumerate()
                .map(|(i, (quantity, unit_cost))| {
                    json!({
                        "id": i,
                        "item_type_display_name": format!("Item {}", i),
                        "unit": "ea",
                        "quantity": quantity,
                        "unit_cost": unit_cost,
                        "total": 0,
                    })
                })
                .collect();
            json!({ "id": s, "name": format!("Section {}", s), "items": items })
        })
        .collect();
    json!({ "data": { "sections": sections } }).to_string()
}

fn totals(estimate: &Estimate) -> Vec<i64> {
    estimate
        .sections()
        .iter()
        .flat_map(|s| s.items.iter().map(|item| item.total))
        .collect()
}

fn rows_strategy() -> impl Strategy<Value = Vec<Vec<(i64, i64)>>> {
    prop::collection::vec(
        prop::collection::vec((0i64..10_000, 0i64..1_000_000), 1..6),
        1..5,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: every loaded item total is quantity * unit_cost.
    #[test]
    fn loaded_totals_match_quantity_times_cost(rows in rows_strategy()) {
        let estimate = parse_document(&document(&rows)).unwrap();
        for section in estimate.sections() {
            for item in &section.items {
                prop_assert_eq!(item.total, item.quantity * item.unit_cost);
            }
        }
    }

    /// Property: grand total equals the sum of all item totals.
    #[test]
    fn grand_total_is_sum_of_items(rows in rows_strategy()) {
        let estimate = parse_document(&document(&rows)).unwrap();
        let expected: i64 = rows.iter().flatten().map(|(q, c)| q * c).sum();
        prop_assert_eq!(estimate.grand_total(), expected);
    }

    /// Property: a quantity edit changes exactly the edited item's total.
    #[test]
    fn quantity_edit_is_isolated(
        rows in rows_strategy(),
        pick in any::<prop::sample::Index>(),
        quantity in 0i64..10_000,
    ) {
        let mut estimate = parse_document(&document(&rows)).unwrap();
        let before = totals(&estimate);

        let target = pick.index(before.len());
        let (section_id, item_id) = estimate
            .sections()
            .iter()
            .flat_map(|s| s.items.iter().map(move |item| (s.id.clone(), item.id.clone())))
            .nth(target)
            .unwrap();

        let updated = estimate.apply_input(&section_id, &item_id, ItemField::Quantity, &quantity.to_string());
        prop_assert_eq!(updated, 1);

        let after = totals(&estimate);
        for (index, (old, new)) in before.iter().zip(&after).enumerate() {
            if index == target {
                let item = estimate.find_items(&section_id, &item_id).next().unwrap();
                prop_assert_eq!(*new, quantity * item.unit_cost);
            } else {
                prop_assert_eq!(old, new);
            }
        }
        prop_assert_eq!(estimate.grand_total(), after.iter().sum::<i64>());
    }

    /// Property: a document without a `data.sections` array never loads.
    #[test]
    fn malformed_envelope_is_rejected(key in "[a-z]{1,8}") {
        prop_assume!(key != "data");
        let text = json!({ key: { "sections": [] } }).to_string();
        prop_assert!(parse_document(&text).is_err());
    }
}
