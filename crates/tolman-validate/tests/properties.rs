//! Property tests for the validation engine.

use std::collections::BTreeMap;

use proptest::prelude::*;
use tolman_model::{Item, ItemId, Tolerance, ToleranceId, ValidationError};
use tolman_validate::validate;

fn make_tolerance(id: &str, name: &str, value: f64, floor: f64, ceiling: f64) -> Tolerance {
    Tolerance {
        id: ToleranceId::new(id),
        name: name.to_string(),
        value,
        floor,
        ceiling,
    }
}

fn make_item(tolerances: Vec<Tolerance>) -> Item {
    Item {
        id: ItemId::new("1"),
        label: "Item 1".to_string(),
        tolerances,
    }
}

proptest! {
    // A value inside [floor, ceiling] on an unpaired tolerance never
    // produces an error.
    #[test]
    fn in_range_value_is_silent(
        floor in -100.0..100.0f64,
        span in 0.0..100.0f64,
        frac in 0.0..=1.0f64,
    ) {
        let value = floor + frac * span;
        let item = make_item(vec![make_tolerance(
            "t-1",
            "Tolerance A",
            value,
            floor,
            floor + span,
        )]);
        prop_assert!(validate(&item, &BTreeMap::new()).is_empty());
    }

    #[test]
    fn below_floor_is_reported(
        floor in -100.0..100.0f64,
        delta in 0.001..1000.0f64,
    ) {
        let item = make_item(vec![make_tolerance(
            "t-1",
            "Tolerance A",
            floor - delta,
            floor,
            floor + 50.0,
        )]);
        let errors = validate(&item, &BTreeMap::new());
        prop_assert_eq!(
            errors,
            vec![ValidationError::BelowFloor {
                tolerance_id: ToleranceId::new("t-1"),
                floor,
            }]
        );
    }

    #[test]
    fn above_ceiling_is_reported(
        ceiling in -100.0..100.0f64,
        delta in 0.001..1000.0f64,
    ) {
        let item = make_item(vec![make_tolerance(
            "t-1",
            "Tolerance A",
            ceiling + delta,
            ceiling - 50.0,
            ceiling,
        )]);
        let errors = validate(&item, &BTreeMap::new());
        prop_assert_eq!(
            errors,
            vec![ValidationError::AboveCeiling {
                tolerance_id: ToleranceId::new("t-1"),
                ceiling,
            }]
        );
    }

    // The pair rule fires exactly when A's effective value exceeds B's.
    #[test]
    fn pair_rule_matches_comparison(
        a in -1000.0..1000.0f64,
        b in -1000.0..1000.0f64,
    ) {
        let item = make_item(vec![
            make_tolerance("t-a", "Tolerance A", a, -10_000.0, 10_000.0),
            make_tolerance("t-b", "Tolerance B", b, -10_000.0, 10_000.0),
        ]);
        let errors = validate(&item, &BTreeMap::new());
        if a > b {
            prop_assert_eq!(
                errors,
                vec![ValidationError::CrossField {
                    tolerance_id: ToleranceId::new("t-a"),
                }]
            );
        } else {
            prop_assert!(errors.is_empty());
        }
    }

    #[test]
    fn repeated_runs_agree(
        a in proptest::option::of(-200.0..200.0f64),
        b in proptest::option::of(-200.0..200.0f64),
    ) {
        let item = make_item(vec![
            make_tolerance("1-1", "Tolerance A", 5.0, 0.0, 10.0),
            make_tolerance("1-2", "Tolerance B", 8.0, 0.0, 15.0),
        ]);
        let mut candidates = BTreeMap::new();
        if let Some(a) = a {
            candidates.insert(ToleranceId::new("1-1"), a);
        }
        if let Some(b) = b {
            candidates.insert(ToleranceId::new("1-2"), b);
        }
        let first = validate(&item, &candidates);
        let second = validate(&item, &candidates);
        prop_assert_eq!(first, second);
    }
}
