//! Assertion helpers for round-trip test suites.
//!
//! A write/read round-trip test builds a container graph, persists it,
//! reads it back and asserts the two graphs are equivalent:
//!
//! ```
//! use nwbeq_core::harness::assert_equivalent;
//! use nwbeq_core::model::{Container, TypeRegistry};
//! use nwbeq_core::Comparator;
//!
//! let registry = TypeRegistry::new().with_type("Device", &["name", "description"]);
//! let written = Container::new("Device", "probe").with_field("description", "silicon");
//! let read_back = written.clone();
//!
//! assert_equivalent(&Comparator::new(&registry), &written, &read_back);
//! ```

use crate::compare::{render_report, Comparator};
use crate::model::Container;

/// Assert that two container graphs are equivalent
///
/// # Panics
///
/// Panics with the Markdown report of every mismatch when the graphs
/// differ.
#[track_caller]
pub fn assert_equivalent(comparator: &Comparator<'_>, expected: &Container, actual: &Container) {
    let report = comparator.check(expected, actual);
    if !report.is_equivalent() {
        panic!(
            "containers `{}` are not equivalent\n\n{}",
            expected.label(),
            render_report(&report)
        );
    }
}

/// Assert that two container graphs differ
///
/// # Panics
///
/// Panics when the graphs are equivalent.
#[track_caller]
pub fn assert_not_equivalent(comparator: &Comparator<'_>, expected: &Container, actual: &Container) {
    if comparator.compare(expected, actual).is_ok() {
        panic!(
            "containers `{}` were expected to differ but are equivalent",
            expected.label()
        );
    }
}
