//! Leaf comparators that turn tolerance predicates into mismatches.

use chrono::{DateTime, FixedOffset};

use crate::classify::is_float_sequence;
use crate::errors::{Mismatch, MismatchDetail, Result, Tolerance};
use crate::model::FieldValue;
use crate::options::CompareOptions;
use crate::path::FieldPath;
use crate::tolerance::{exact_eq, floats_approx_eq, within_window};

fn value_mismatch(
    path: FieldPath,
    expected: &FieldValue,
    actual: &FieldValue,
    tolerance: Option<Tolerance>,
) -> Mismatch {
    Mismatch::new(
        path,
        MismatchDetail::Value {
            expected: expected.to_string(),
            actual: actual.to_string(),
            tolerance,
        },
    )
}

/// Float approximate comparison of two float-like values
pub(crate) fn compare_float(
    expected: &FieldValue,
    actual: &FieldValue,
    path: &FieldPath,
    options: &CompareOptions,
) -> Result<()> {
    let tolerance = options.float_tolerance;
    match (expected.as_float(), actual.as_float()) {
        (Some(e), Some(a)) if floats_approx_eq(e, a, tolerance) => Ok(()),
        _ => Err(value_mismatch(
            path.clone(),
            expected,
            actual,
            Some(Tolerance::Absolute(tolerance)),
        )),
    }
}

/// Timestamp window comparison anchored on the expected value
pub(crate) fn compare_timestamp(
    expected: &DateTime<FixedOffset>,
    actual: &DateTime<FixedOffset>,
    path: &FieldPath,
    options: &CompareOptions,
) -> Result<()> {
    if within_window(expected, actual, options.timestamp_window()) {
        return Ok(());
    }
    Err(Mismatch::new(
        path.clone(),
        MismatchDetail::Value {
            expected: expected.to_rfc3339(),
            actual: actual.to_rfc3339(),
            tolerance: Some(Tolerance::WindowMicros(options.timestamp_window_us)),
        },
    ))
}

/// Exact comparison
pub(crate) fn compare_exact(
    expected: &FieldValue,
    actual: &FieldValue,
    path: &FieldPath,
) -> Result<()> {
    if exact_eq(expected, actual) {
        Ok(())
    } else {
        Err(value_mismatch(path.clone(), expected, actual, None))
    }
}

/// Array/sequence comparison
///
/// Lengths must match. When the expected side's first element is float-like
/// every float-like pair is compared approximately, otherwise elements are
/// compared exactly. Nested rows are compared recursively, each row
/// choosing its own mode from its first element.
///
/// # Errors
///
/// `LengthMismatch` for differing lengths, `ValueMismatch` naming the
/// first differing index.
pub fn compare_elements(
    expected: &[FieldValue],
    actual: &[FieldValue],
    path: &FieldPath,
    options: &CompareOptions,
) -> Result<()> {
    if expected.len() != actual.len() {
        return Err(Mismatch::new(
            path.clone(),
            MismatchDetail::Length {
                expected: expected.len(),
                actual: actual.len(),
            },
        ));
    }

    let float_mode = is_float_sequence(expected);
    let tolerance = options.float_tolerance;

    for (i, (e, a)) in expected.iter().zip(actual).enumerate() {
        if let (FieldValue::Sequence(e_row), FieldValue::Sequence(a_row)) = (e, a) {
            compare_elements(e_row, a_row, &path.index(i), options)?;
            continue;
        }

        let (equal, applied) = match (float_mode, e.as_float(), a.as_float()) {
            (true, Some(x), Some(y)) => (
                floats_approx_eq(x, y, tolerance),
                Some(Tolerance::Absolute(tolerance)),
            ),
            _ => (exact_eq(e, a), None),
        };
        if !equal {
            return Err(value_mismatch(path.index(i), e, a, applied));
        }
    }

    Ok(())
}
