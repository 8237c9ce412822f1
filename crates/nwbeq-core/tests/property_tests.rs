//! Property Tests
//!
//! Reflexivity and symmetry of the comparator over generated container
//! graphs.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{DateTime, Duration, FixedOffset};
use nwbeq_core::model::{Container, FieldValue, InMemoryData, TypeRegistry};
use nwbeq_core::Comparator;
use proptest::prelude::*;

fn registry() -> TypeRegistry {
    TypeRegistry::new()
        .with_type("Series", &["name", "rate", "data", "count", "label", "stamp"])
        .with_type("Group", &["name", "children", "series", "table"])
}

fn epoch() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2020-01-01T00:00:00+00:00").unwrap()
}

fn series_strategy() -> impl Strategy<Value = Container> {
    (
        "[a-z]{1,8}",
        -1.0e6f64..1.0e6,
        prop::collection::vec(-1.0e3f64..1.0e3, 0..8),
        any::<i64>(),
        prop::option::of("[a-z ]{0,12}"),
        0i64..1_000_000_000,
    )
        .prop_map(|(name, rate, data, count, label, offset_us)| {
            Container::new("Series", name)
                .with_field("rate", rate)
                .with_field("data", FieldValue::data(InMemoryData::new("VectorData", data)))
                .with_field("count", count)
                .with_field("label", label)
                .with_field("stamp", epoch() + Duration::microseconds(offset_us))
        })
}

fn group_strategy() -> impl Strategy<Value = Container> {
    let leaf = series_strategy().prop_map(|s| Container::new("Group", "leaf").with_field("series", s));
    leaf.prop_recursive(3, 16, 4, |inner| {
        (
            "[a-z]{1,8}",
            prop::collection::vec(inner, 1..4),
            prop::collection::btree_map("[a-z]{1,4}", series_strategy(), 1..3),
        )
            .prop_map(|(name, children, table)| {
                Container::new("Group", name)
                    .with_field("children", children)
                    .with_field("table", FieldValue::mapping(table))
            })
    })
}

proptest! {
    #[test]
    fn prop_compare_is_reflexive(graph in group_strategy()) {
        let registry = registry();
        let cmp = Comparator::new(&registry);
        prop_assert!(cmp.compare(&graph, &graph.clone()).is_ok());
    }

    #[test]
    fn prop_compare_is_symmetric(a in series_strategy(), b in series_strategy()) {
        let registry = registry();
        let cmp = Comparator::new(&registry);
        prop_assert_eq!(cmp.compare(&a, &b).is_ok(), cmp.compare(&b, &a).is_ok());
    }

    #[test]
    fn prop_float_noise_below_tolerance_is_ignored(graph in series_strategy(), noise in -4.0e-7f64..4.0e-7) {
        let registry = registry();
        let cmp = Comparator::new(&registry);
        let rate = graph.field("rate").and_then(FieldValue::as_float).unwrap();
        let noisy = graph.clone().with_field("rate", rate + noise);
        prop_assert!(cmp.compare(&graph, &noisy).is_ok());
    }

    #[test]
    fn prop_check_and_compare_agree(a in group_strategy(), b in group_strategy()) {
        let registry = registry();
        let cmp = Comparator::new(&registry);
        let report = cmp.check(&a, &b);
        prop_assert_eq!(report.is_equivalent(), cmp.compare(&a, &b).is_ok());
    }
}
