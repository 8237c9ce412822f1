use std::borrow::Cow;
use std::fmt;

use super::value::FieldValue;

/// Opaque, possibly lazy sequence of values referenced from a container
///
/// Producers back this with whatever they hold (an in-memory vector, a
/// disk-backed dataset). The comparator only relies on the type tag, the
/// length and, when it is cheap to get, the materialized content.
pub trait DataHandle: fmt::Debug + Send + Sync {
    /// Type tag of the handle (e.g. `VectorData`, `DynamicTableRegion`)
    fn type_tag(&self) -> &str;

    /// Number of elements along the first axis
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materialized content, or `None` if it cannot be produced cheaply
    fn content(&self) -> Option<Cow<'_, [FieldValue]>>;
}

/// Data handle whose content is held in memory
#[derive(Debug, Clone)]
pub struct InMemoryData {
    type_tag: String,
    values: Vec<FieldValue>,
}

impl InMemoryData {
    pub fn new<T: Into<FieldValue>>(type_tag: impl Into<String>, values: Vec<T>) -> Self {
        Self {
            type_tag: type_tag.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }
}

impl DataHandle for InMemoryData {
    fn type_tag(&self) -> &str {
        &self.type_tag
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn content(&self) -> Option<Cow<'_, [FieldValue]>> {
        Some(Cow::Borrowed(&self.values))
    }
}

/// Data handle that only knows its length
///
/// Stands in for datasets whose content lives behind I/O the comparator
/// should not trigger; comparisons against it are length-only.
#[derive(Debug, Clone)]
pub struct LazyData {
    type_tag: String,
    len: usize,
}

impl LazyData {
    pub fn new(type_tag: impl Into<String>, len: usize) -> Self {
        Self {
            type_tag: type_tag.into(),
            len,
        }
    }
}

impl DataHandle for LazyData {
    fn type_tag(&self) -> &str {
        &self.type_tag
    }

    fn len(&self) -> usize {
        self.len
    }

    fn content(&self) -> Option<Cow<'_, [FieldValue]>> {
        None
    }
}
