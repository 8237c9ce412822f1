//! Tolerant equality predicates.
//!
//! Pure functions with no knowledge of paths or failure reporting; the
//! comparator wraps them into mismatches.

use chrono::{DateTime, Duration, FixedOffset};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::model::FieldValue;

/// Float approximate equality
///
/// Equal when `|expected - actual| <= tolerance`, with a few ulps of slack
/// so that differences representing exactly `tolerance` in decimal are
/// accepted at any magnitude. Two NaNs are equal, as are two infinities of
/// the same sign.
pub fn floats_approx_eq(expected: f64, actual: f64, tolerance: f64) -> bool {
    if expected.is_nan() || actual.is_nan() {
        return expected.is_nan() && actual.is_nan();
    }
    if expected.is_infinite() || actual.is_infinite() {
        return expected == actual;
    }
    if expected == actual {
        return true;
    }
    let slack = 4.0 * f64::EPSILON * expected.abs().max(actual.abs()).max(tolerance);
    (expected - actual).abs() <= tolerance + slack
}

/// Timestamp window equality
///
/// `candidate` must fall within `[reference - window, reference + window]`.
/// The window is anchored on the reference (expected) value only. Bounds
/// are never materialized, so windows reaching past the representable
/// range do not overflow.
pub fn within_window(
    reference: &DateTime<FixedOffset>,
    candidate: &DateTime<FixedOffset>,
    window: Duration,
) -> bool {
    let offset = candidate.signed_duration_since(*reference);
    offset >= -window && offset <= window
}

/// Exact structural equality
///
/// No numeric coercion: `Int(1)` and `Float(1.0)` differ. Containers and
/// data handles nested inside exact-compared values are equal only when
/// they are the same shared instance.
pub fn exact_eq(expected: &FieldValue, actual: &FieldValue) -> bool {
    match (expected, actual) {
        (FieldValue::None, FieldValue::None) => true,
        (FieldValue::Bool(a), FieldValue::Bool(b)) => a == b,
        (FieldValue::Int(a), FieldValue::Int(b)) => a == b,
        (FieldValue::Str(a), FieldValue::Str(b)) => a == b,
        (FieldValue::Float(a), FieldValue::Float(b)) => a == b,
        (FieldValue::Float32(a), FieldValue::Float32(b)) => a == b,
        (FieldValue::Timestamp(a), FieldValue::Timestamp(b)) => a == b,
        (FieldValue::Sequence(a), FieldValue::Sequence(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| exact_eq(x, y))
        }
        (FieldValue::Mapping(a), FieldValue::Mapping(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .zip(b)
                    .all(|((ka, va), (kb, vb))| ka == kb && exact_eq(va, vb))
        }
        (FieldValue::Container(a), FieldValue::Container(b)) => Arc::ptr_eq(a, b),
        (FieldValue::Data(a), FieldValue::Data(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

/// Key-set delta between two mappings
///
/// Returns `(only_expected, only_actual)`, each in key order.
pub fn key_set_delta<V>(
    expected: &BTreeMap<String, V>,
    actual: &BTreeMap<String, V>,
) -> (Vec<String>, Vec<String>) {
    let only_expected: Vec<String> = expected
        .keys()
        .filter(|k| !actual.contains_key(*k))
        .cloned()
        .collect();
    let only_actual: Vec<String> = actual
        .keys()
        .filter(|k| !expected.contains_key(*k))
        .cloned()
        .collect();
    (only_expected, only_actual)
}
