//! Field-isolated comparison report.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::errors::{Mismatch, MismatchKind, Result};
use crate::nwbeq_core_types::CheckId;

/// Every mismatch found by one [`Comparator::check`] run, in walk order
///
/// [`Comparator::check`]: crate::compare::Comparator::check
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    check_id: CheckId,
    root_type: String,
    fields_checked: usize,
    failures: Vec<Mismatch>,
}

impl ComparisonReport {
    pub(crate) fn new(
        check_id: CheckId,
        root_type: impl Into<String>,
        fields_checked: usize,
        failures: Vec<Mismatch>,
    ) -> Self {
        Self {
            check_id,
            root_type: root_type.into(),
            fields_checked,
            failures,
        }
    }

    pub fn check_id(&self) -> &CheckId {
        &self.check_id
    }

    pub fn root_type(&self) -> &str {
        &self.root_type
    }

    /// Declared fields visited across all container levels
    pub fn fields_checked(&self) -> usize {
        self.fields_checked
    }

    pub fn is_equivalent(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[Mismatch] {
        &self.failures
    }

    pub fn first_failure(&self) -> Option<&Mismatch> {
        self.failures.first()
    }

    /// Failure counts keyed by stable code
    pub fn count_by_kind(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for failure in &self.failures {
            *counts.entry(failure.code()).or_insert(0) += 1;
        }
        counts
    }

    /// Number of failures of one kind
    pub fn count_of(&self, kind: MismatchKind) -> usize {
        self.failures.iter().filter(|m| m.kind() == kind).count()
    }

    /// Collapse to the first failure
    ///
    /// # Errors
    ///
    /// The first recorded mismatch, if any.
    pub fn into_result(self) -> Result<()> {
        match self.failures.into_iter().next() {
            Some(first) => Err(first),
            None => Ok(()),
        }
    }
}
