//! Built-in seed data.

use tolman_model::{Item, ItemId, Tolerance, ToleranceId};

/// The items a fresh store starts with.
pub fn seed_items() -> Vec<Item> {
    vec![
        Item {
            id: ItemId::new("1"),
            label: "Item 1".to_string(),
            tolerances: vec![
                seed_tolerance("1-1", "Tolerance A", 5.0, 0.0, 10.0),
                seed_tolerance("1-2", "Tolerance B", 8.0, 0.0, 15.0),
            ],
        },
        Item {
            id: ItemId::new("2"),
            label: "Item 2".to_string(),
            tolerances: vec![
                seed_tolerance("2-1", "Tolerance A", 3.0, 0.0, 10.0),
                seed_tolerance("2-2", "Tolerance B", 7.0, 0.0, 15.0),
            ],
        },
    ]
}

fn seed_tolerance(id: &str, name: &str, value: f64, floor: f64, ceiling: f64) -> Tolerance {
    Tolerance {
        id: ToleranceId::new(id),
        name: name.to_string(),
        value,
        floor,
        ceiling,
    }
}
