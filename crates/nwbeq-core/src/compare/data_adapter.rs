//! Opaque-data equality adapter.
//!
//! Compares data handles that may differ in backing (in memory vs lazy,
//! one backend vs another) but share the length/content contract, and
//! compares a handle against a raw sequence held by the other side.

use crate::compare::leaf::compare_elements;
use crate::errors::{Mismatch, MismatchDetail, Result, Side};
use crate::model::{DataHandle, FieldValue};
use crate::options::{CompareOptions, DataContentMode};
use crate::path::FieldPath;

fn length_mismatch(path: &FieldPath, expected: usize, actual: usize) -> Mismatch {
    Mismatch::new(path.clone(), MismatchDetail::Length { expected, actual })
}

/// Compare two data handles
///
/// Type tags and lengths must match. Content is then compared elementwise
/// when both handles can materialize it and the options allow it;
/// otherwise type and length equality is accepted.
///
/// # Errors
///
/// `TypeMismatch` for differing type tags, `LengthMismatch` with both
/// lengths, `ValueMismatch` for differing content.
pub fn compare_data(
    expected: &dyn DataHandle,
    actual: &dyn DataHandle,
    path: &FieldPath,
    options: &CompareOptions,
) -> Result<()> {
    if expected.type_tag() != actual.type_tag() {
        return Err(Mismatch::new(
            path.clone(),
            MismatchDetail::TypeTag {
                expected: expected.type_tag().to_string(),
                actual: actual.type_tag().to_string(),
            },
        ));
    }
    if expected.len() != actual.len() {
        return Err(length_mismatch(path, expected.len(), actual.len()));
    }
    if options.data_content == DataContentMode::LengthOnly {
        return Ok(());
    }

    match (expected.content(), actual.content()) {
        (Some(e), Some(a)) => compare_elements(&e, &a, path, options),
        _ => {
            tracing::trace!(
                path = %path,
                type_tag = expected.type_tag(),
                "data content unavailable; accepted on type and length"
            );
            Ok(())
        }
    }
}

/// Compare a data handle with a raw sequence from the other side
///
/// `handle_side` says which side of the comparison holds the handle, so
/// the expected value keeps driving element mode selection. A handle that
/// cannot materialize its content is compared by length only.
///
/// # Errors
///
/// `LengthMismatch` with both lengths, `ValueMismatch` for differing content.
pub fn compare_data_with_sequence(
    handle: &dyn DataHandle,
    sequence: &[FieldValue],
    handle_side: Side,
    path: &FieldPath,
    options: &CompareOptions,
) -> Result<()> {
    let (expected_len, actual_len) = match handle_side {
        Side::Expected => (handle.len(), sequence.len()),
        Side::Actual => (sequence.len(), handle.len()),
    };
    if expected_len != actual_len {
        return Err(length_mismatch(path, expected_len, actual_len));
    }

    let Some(content) = handle.content() else {
        tracing::trace!(
            path = %path,
            type_tag = handle.type_tag(),
            "data content unavailable; accepted on length"
        );
        return Ok(());
    };

    match handle_side {
        Side::Expected => compare_elements(&content, sequence, path, options),
        Side::Actual => compare_elements(sequence, &content, path, options),
    }
}
