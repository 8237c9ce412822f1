//! Container comparator.
//!
//! [`Comparator::compare`] walks the declared field set of the expected
//! container, classifies each field and dispatches to the leaf comparators,
//! the data adapter, or into nested containers. It stops at the first
//! mismatch.
//!
//! [`Comparator::check`] walks the same way but isolates every field: a
//! mismatch is recorded and the walk continues with the next sibling, so a
//! single run reports every independent failure.
//!
//! Nested containers are queued on an explicit work stack rather than
//! recursed into, so nesting depth is bounded by `max_depth` alone and
//! never by the thread's stack.

use std::collections::BTreeMap;
use std::time::Instant;

use crate::classify::{classify, Category};
use crate::compare::data_adapter::{compare_data, compare_data_with_sequence};
use crate::compare::leaf::{compare_elements, compare_exact, compare_float, compare_timestamp};
use crate::compare::report::ComparisonReport;
use crate::errors::{ConfigError, Mismatch, MismatchDetail, Result, Side};
use crate::model::{Container, FieldValue, TypeRegistry};
use crate::nwbeq_core_types::CheckId;
use crate::options::{CompareOptions, LengthPolicy};
use crate::path::FieldPath;
use crate::tolerance::key_set_delta;
use crate::{log_op_end, log_op_error, log_op_start};

/// Structural-equivalence comparator bound to a type registry
#[derive(Debug, Clone)]
pub struct Comparator<'r> {
    registry: &'r TypeRegistry,
    options: CompareOptions,
}

impl<'r> Comparator<'r> {
    /// Comparator with default options
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self {
            registry,
            options: CompareOptions::default(),
        }
    }

    /// Comparator with explicit options
    ///
    /// # Errors
    ///
    /// `ConfigError::Invalid` if the options fail [`CompareOptions::validate`].
    pub fn with_options(
        registry: &'r TypeRegistry,
        options: CompareOptions,
    ) -> std::result::Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self { registry, options })
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    pub fn registry(&self) -> &TypeRegistry {
        self.registry
    }

    /// Compare two containers, stopping at the first mismatch
    ///
    /// # Errors
    ///
    /// The first [`Mismatch`] found, carrying the full path from the root.
    pub fn compare(&self, expected: &Container, actual: &Container) -> Result<()> {
        let check_id = CheckId::new();
        let start = Instant::now();
        log_op_start!(
            "compare",
            check_id = %check_id,
            type_tag = expected.type_tag()
        );

        let mut walk = Walk::new(self, Mode::FailFast);
        let result = walk.run(expected, actual);

        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(()) => {
                log_op_end!(
                    "compare",
                    duration_ms = duration_ms,
                    check_id = %check_id,
                    fields_checked = walk.fields_checked
                );
            }
            Err(m) => {
                log_op_error!(
                    "compare",
                    m,
                    duration_ms = duration_ms,
                    check_id = %check_id,
                    path = %m.path()
                );
            }
        }
        result
    }

    /// Compare two containers with every field isolated
    ///
    /// Never short-circuits across sibling fields or mapping keys; the
    /// report holds every mismatch in walk order.
    pub fn check(&self, expected: &Container, actual: &Container) -> ComparisonReport {
        let check_id = CheckId::new();
        let start = Instant::now();
        log_op_start!(
            "check",
            check_id = %check_id,
            type_tag = expected.type_tag()
        );

        let mut walk = Walk::new(self, Mode::Isolated);
        if let Err(m) = walk.run(expected, actual) {
            walk.failures.push(m);
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        log_op_end!(
            "check",
            duration_ms = duration_ms,
            check_id = %check_id,
            fields_checked = walk.fields_checked,
            failure_count = walk.failures.len()
        );

        ComparisonReport::new(
            check_id,
            expected.type_tag(),
            walk.fields_checked,
            walk.failures,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    FailFast,
    Isolated,
}

/// Pending unit of work; popped in walk order
enum Step<'a> {
    /// Two containers held by a container of type `owner`
    Containers {
        expected: &'a Container,
        actual: &'a Container,
        path: FieldPath,
        depth: usize,
        owner: &'a str,
    },
    /// One declared field of two containers at `depth`
    Field {
        expected: &'a Container,
        actual: &'a Container,
        name: &'a str,
        path: FieldPath,
        depth: usize,
    },
    /// Mismatch found while queueing members, reported in position
    Report(Mismatch),
}

/// State of one comparison walk
struct Walk<'c, 'r> {
    comparator: &'c Comparator<'r>,
    mode: Mode,
    fields_checked: usize,
    failures: Vec<Mismatch>,
}

impl<'c, 'r> Walk<'c, 'r> {
    fn new(comparator: &'c Comparator<'r>, mode: Mode) -> Self {
        Self {
            comparator,
            mode,
            fields_checked: 0,
            failures: Vec::new(),
        }
    }

    fn options(&self) -> &'c CompareOptions {
        &self.comparator.options
    }

    /// Fail fast, or record and carry on with the next sibling
    fn record(&mut self, mismatch: Mismatch) -> Result<()> {
        tracing::debug!(
            path = %mismatch.path(),
            err.code = mismatch.code(),
            "mismatch"
        );
        match self.mode {
            Mode::FailFast => Err(mismatch),
            Mode::Isolated => {
                self.failures.push(mismatch);
                Ok(())
            }
        }
    }

    fn run<'a>(&mut self, expected: &'a Container, actual: &'a Container) -> Result<()>
    where
        'r: 'a,
    {
        let mut stack = vec![Step::Containers {
            expected,
            actual,
            path: FieldPath::root(expected.label()),
            depth: 0,
            owner: expected.type_tag(),
        }];

        while let Some(step) = stack.pop() {
            match step {
                Step::Containers {
                    expected,
                    actual,
                    path,
                    depth,
                    owner,
                } => {
                    if let Err(m) = self.open(expected, actual, path, depth, &mut stack) {
                        self.record(m.within(owner))?;
                    }
                }
                Step::Field {
                    expected,
                    actual,
                    name,
                    path,
                    depth,
                } => {
                    self.fields_checked += 1;
                    let owner = expected.type_tag();
                    if let Err(m) = self.field(expected, actual, name, &path, depth, &mut stack) {
                        self.record(m.within(owner))?;
                    }
                }
                Step::Report(m) => self.record(m)?,
            }
        }

        Ok(())
    }

    /// Check a container pair and queue its declared fields
    fn open<'a>(
        &mut self,
        expected: &'a Container,
        actual: &'a Container,
        path: FieldPath,
        depth: usize,
        stack: &mut Vec<Step<'a>>,
    ) -> Result<()>
    where
        'r: 'a,
    {
        let limit = self.options().max_depth;
        if depth > limit {
            return Err(Mismatch::new(path, MismatchDetail::TooDeep { limit }));
        }
        if expected.type_tag() != actual.type_tag() {
            return Err(Mismatch::new(
                path,
                MismatchDetail::TypeTag {
                    expected: expected.type_tag().to_string(),
                    actual: actual.type_tag().to_string(),
                },
            ));
        }
        let registry: &'r TypeRegistry = self.comparator.registry;
        let Some(descriptor) = registry.descriptor(expected.type_tag()) else {
            return Err(Mismatch::new(
                path,
                MismatchDetail::UnregisteredType {
                    type_tag: expected.type_tag().to_string(),
                },
            ));
        };

        for name in descriptor.fields().iter().rev() {
            stack.push(Step::Field {
                expected,
                actual,
                name: name.as_str(),
                path: path.field(name),
                depth,
            });
        }

        Ok(())
    }

    fn field<'a>(
        &mut self,
        expected: &'a Container,
        actual: &'a Container,
        name: &str,
        path: &FieldPath,
        depth: usize,
        stack: &mut Vec<Step<'a>>,
    ) -> Result<()> {
        let absent = |side| {
            Mismatch::new(
                path.clone(),
                MismatchDetail::FieldAbsent {
                    field: name.to_string(),
                    side,
                },
            )
        };
        match (expected.field(name), actual.field(name)) {
            (Some(e), Some(a)) => self.values(e, a, path, depth, expected.type_tag(), stack),
            // unset on both sides
            (None, None) => Ok(()),
            (None, Some(_)) => Err(absent(Side::Expected)),
            (Some(_), None) => Err(absent(Side::Actual)),
        }
    }

    /// Compare two field values of a container of type `owner`
    ///
    /// Leaf mismatches are returned; nested container pairs are queued.
    fn values<'a>(
        &mut self,
        expected: &'a FieldValue,
        actual: &'a FieldValue,
        path: &FieldPath,
        depth: usize,
        owner: &'a str,
        stack: &mut Vec<Step<'a>>,
    ) -> Result<()> {
        let category = classify(expected);
        tracing::trace!(path = %path, category = %category, "dispatch");

        let options = self.options();
        match category {
            Category::EmptySequence => match actual {
                FieldValue::Sequence(items) => lengths_equal(0, items.len(), path),
                FieldValue::Data(handle) => lengths_equal(0, handle.len(), path),
                _ => Err(category_mismatch(category, actual, path)),
            },
            Category::ContainerSequence => {
                let (e_items, a_items) = match (expected, actual) {
                    (FieldValue::Sequence(e), FieldValue::Sequence(a)) => (e, a),
                    _ => return Err(category_mismatch(category, actual, path)),
                };
                let paired = self.paired_len(e_items.len(), a_items.len(), path)?;
                for i in (0..paired).rev() {
                    stack.push(member(&e_items[i], &a_items[i], path.index(i), depth, owner));
                }
                Ok(())
            }
            Category::DataSequence => {
                let (e_items, a_items) = match (expected, actual) {
                    (FieldValue::Sequence(e), FieldValue::Sequence(a)) => (e, a),
                    _ => return Err(category_mismatch(category, actual, path)),
                };
                let paired = self.paired_len(e_items.len(), a_items.len(), path)?;
                for (i, (e, a)) in e_items.iter().zip(a_items).take(paired).enumerate() {
                    if let Err(m) = self.data_pair(e, a, &path.index(i)) {
                        self.record(m.within(owner))?;
                    }
                }
                Ok(())
            }
            Category::ScalarSequence => match (expected, actual) {
                (FieldValue::Sequence(e), FieldValue::Sequence(a)) => {
                    compare_elements(e, a, path, options)
                }
                (FieldValue::Sequence(e), FieldValue::Data(handle)) => {
                    compare_data_with_sequence(handle.as_ref(), e, Side::Actual, path, options)
                }
                _ => Err(category_mismatch(category, actual, path)),
            },
            Category::ContainerMapping => {
                let (e_map, a_map) = match (expected, actual) {
                    (FieldValue::Mapping(e), FieldValue::Mapping(a)) => (e, a),
                    _ => return Err(category_mismatch(category, actual, path)),
                };
                key_sets_equal(e_map, a_map, path)?;
                for (key, e) in e_map.iter().rev() {
                    if let Some(a) = a_map.get(key) {
                        stack.push(member(e, a, path.key(key), depth, owner));
                    }
                }
                Ok(())
            }
            Category::NestedContainer => match (expected, actual) {
                (FieldValue::Container(ec), FieldValue::Container(ac)) => {
                    stack.push(Step::Containers {
                        expected: ec.as_ref(),
                        actual: ac.as_ref(),
                        path: path.clone(),
                        depth: depth + 1,
                        owner,
                    });
                    Ok(())
                }
                _ => Err(category_mismatch(category, actual, path)),
            },
            Category::NestedData => self.data_pair(expected, actual, path),
            Category::FloatLike => match classify(actual) {
                Category::FloatLike => compare_float(expected, actual, path, options),
                _ => Err(category_mismatch(category, actual, path)),
            },
            Category::Timestamp => match (expected, actual) {
                (FieldValue::Timestamp(e), FieldValue::Timestamp(a)) => {
                    compare_timestamp(e, a, path, options)
                }
                _ => Err(category_mismatch(category, actual, path)),
            },
            Category::Other => {
                let actual_category = classify(actual);
                if actual_category != Category::Other {
                    return Err(category_mismatch(category, actual, path));
                }
                if let (FieldValue::Mapping(e_map), FieldValue::Mapping(a_map)) = (expected, actual)
                {
                    key_sets_equal(e_map, a_map, path)?;
                    for (key, e) in e_map {
                        let Some(a) = a_map.get(key) else { continue };
                        if let Err(m) = compare_exact(e, a, &path.key(key)) {
                            self.record(m.within(owner))?;
                        }
                    }
                    return Ok(());
                }
                compare_exact(expected, actual, path)
            }
        }
    }

    /// Data handle on the expected side, or either side of a handle/sequence pair
    fn data_pair(&self, expected: &FieldValue, actual: &FieldValue, path: &FieldPath) -> Result<()> {
        let options = self.options();
        match (expected, actual) {
            (FieldValue::Data(e), FieldValue::Data(a)) => {
                compare_data(e.as_ref(), a.as_ref(), path, options)
            }
            (FieldValue::Data(e), FieldValue::Sequence(a)) => {
                compare_data_with_sequence(e.as_ref(), a, Side::Expected, path, options)
            }
            (FieldValue::Sequence(e), FieldValue::Data(a)) => {
                compare_data_with_sequence(a.as_ref(), e, Side::Actual, path, options)
            }
            _ => Err(element_category_mismatch(expected, actual, path)),
        }
    }

    /// Number of positions to pair under the configured length policy
    fn paired_len(&self, expected: usize, actual: usize, path: &FieldPath) -> Result<usize> {
        if expected == actual {
            return Ok(expected);
        }
        match self.options().length_policy {
            LengthPolicy::Strict => Err(Mismatch::new(
                path.clone(),
                MismatchDetail::Length { expected, actual },
            )),
            LengthPolicy::Lenient => {
                tracing::debug!(
                    path = %path,
                    expected,
                    actual,
                    "length differs; pairing positionally"
                );
                Ok(expected.min(actual))
            }
        }
    }
}

/// Queue a sequence element or mapping value held by a container of type `owner`
fn member<'a>(
    expected: &'a FieldValue,
    actual: &'a FieldValue,
    path: FieldPath,
    depth: usize,
    owner: &'a str,
) -> Step<'a> {
    match (expected, actual) {
        (FieldValue::Container(ec), FieldValue::Container(ac)) => Step::Containers {
            expected: ec.as_ref(),
            actual: ac.as_ref(),
            path,
            depth: depth + 1,
            owner,
        },
        _ => Step::Report(element_category_mismatch(expected, actual, &path).within(owner)),
    }
}

fn lengths_equal(expected: usize, actual: usize, path: &FieldPath) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Mismatch::new(
            path.clone(),
            MismatchDetail::Length { expected, actual },
        ))
    }
}

fn key_sets_equal<V>(
    expected: &BTreeMap<String, V>,
    actual: &BTreeMap<String, V>,
    path: &FieldPath,
) -> Result<()> {
    let (only_expected, only_actual) = key_set_delta(expected, actual);
    if only_expected.is_empty() && only_actual.is_empty() {
        return Ok(());
    }
    Err(Mismatch::new(
        path.clone(),
        MismatchDetail::KeySet {
            only_expected,
            only_actual,
        },
    ))
}

fn category_mismatch(expected: Category, actual: &FieldValue, path: &FieldPath) -> Mismatch {
    Mismatch::new(
        path.clone(),
        MismatchDetail::Category {
            expected,
            actual: classify(actual),
        },
    )
}

fn element_category_mismatch(
    expected: &FieldValue,
    actual: &FieldValue,
    path: &FieldPath,
) -> Mismatch {
    category_mismatch(classify(expected), actual, path)
}
