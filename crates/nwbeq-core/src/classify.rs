//! Value classifier.
//!
//! Assigns every field value to exactly one comparison [`Category`]. The
//! decision is structural: it looks at the value's shape and, for
//! collections, at the first element. Type names are never consulted, so a
//! reader-side and a writer-side representation of the same field land in
//! the same category even when their concrete backing differs.

use serde::Serialize;
use std::fmt;

use crate::model::FieldValue;

/// Closed set of comparison categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Zero-length sequence; compared by length only
    EmptySequence,
    /// Sequence whose first element is a container
    ContainerSequence,
    /// Sequence whose first element is a data handle
    DataSequence,
    /// Any other non-empty sequence (numbers, strings, nested rows)
    #[serde(rename = "numeric-or-scalar-sequence")]
    ScalarSequence,
    /// Non-empty mapping whose first value is a container
    ContainerMapping,
    NestedContainer,
    NestedData,
    Timestamp,
    /// `Float` or `Float32`
    FloatLike,
    /// Everything compared with exact equality
    Other,
}

impl Category {
    /// Stable label used in diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            Category::EmptySequence => "empty-sequence",
            Category::ContainerSequence => "container-sequence",
            Category::DataSequence => "data-sequence",
            Category::ScalarSequence => "numeric-or-scalar-sequence",
            Category::ContainerMapping => "container-mapping",
            Category::NestedContainer => "nested-container",
            Category::NestedData => "nested-data",
            Category::Timestamp => "timestamp",
            Category::FloatLike => "float-like",
            Category::Other => "other",
        }
    }

    /// True for the four sequence categories
    pub fn is_sequence(&self) -> bool {
        matches!(
            self,
            Category::EmptySequence
                | Category::ContainerSequence
                | Category::DataSequence
                | Category::ScalarSequence
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a field value
///
/// Rules apply in priority order: sequences by length and first element,
/// then container mappings, bare containers, bare data handles, timestamps,
/// floats, and finally everything else.
pub fn classify(value: &FieldValue) -> Category {
    match value {
        FieldValue::Sequence(items) => match items.first() {
            None => Category::EmptySequence,
            Some(FieldValue::Container(_)) => Category::ContainerSequence,
            Some(FieldValue::Data(_)) => Category::DataSequence,
            Some(_) => Category::ScalarSequence,
        },
        FieldValue::Mapping(map) => match map.values().next() {
            Some(FieldValue::Container(_)) => Category::ContainerMapping,
            _ => Category::Other,
        },
        FieldValue::Container(_) => Category::NestedContainer,
        FieldValue::Data(_) => Category::NestedData,
        FieldValue::Timestamp(_) => Category::Timestamp,
        FieldValue::Float(_) | FieldValue::Float32(_) => Category::FloatLike,
        FieldValue::None | FieldValue::Bool(_) | FieldValue::Int(_) | FieldValue::Str(_) => {
            Category::Other
        }
    }
}

/// True if the first element of a sequence selects float-approximate mode
pub fn is_float_sequence(items: &[FieldValue]) -> bool {
    items
        .first()
        .map(|first| classify(first) == Category::FloatLike)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Container, InMemoryData};
    use chrono::DateTime;

    fn container() -> FieldValue {
        Container::new("Device", "dev1").into()
    }

    fn handle() -> FieldValue {
        FieldValue::data(InMemoryData::new("VectorData", vec![1.0]))
    }

    #[test]
    fn test_empty_sequence_wins_over_element_type() {
        assert_eq!(
            classify(&FieldValue::Sequence(Vec::new())),
            Category::EmptySequence
        );
    }

    #[test]
    fn test_sequence_classified_by_first_element() {
        assert_eq!(
            classify(&FieldValue::Sequence(vec![container(), FieldValue::Int(1)])),
            Category::ContainerSequence
        );
        assert_eq!(
            classify(&FieldValue::Sequence(vec![handle()])),
            Category::DataSequence
        );
        assert_eq!(
            classify(&vec![1.0, 2.0].into()),
            Category::ScalarSequence
        );
        assert_eq!(
            classify(&vec!["a", "b"].into()),
            Category::ScalarSequence
        );
    }

    #[test]
    fn test_mapping_of_containers() {
        let m = FieldValue::mapping([("mod", container())]);
        assert_eq!(classify(&m), Category::ContainerMapping);
    }

    #[test]
    fn test_empty_or_scalar_mapping_is_other() {
        assert_eq!(
            classify(&FieldValue::mapping(Vec::<(String, FieldValue)>::new())),
            Category::Other
        );
        assert_eq!(
            classify(&FieldValue::mapping([("a", 1i64)])),
            Category::Other
        );
    }

    #[test]
    fn test_bare_values() {
        assert_eq!(classify(&container()), Category::NestedContainer);
        assert_eq!(classify(&handle()), Category::NestedData);
        assert_eq!(classify(&FieldValue::Float(0.1)), Category::FloatLike);
        assert_eq!(classify(&FieldValue::Float32(0.1)), Category::FloatLike);
        assert_eq!(classify(&FieldValue::Int(1)), Category::Other);
        assert_eq!(classify(&FieldValue::Bool(true)), Category::Other);
        assert_eq!(classify(&FieldValue::None), Category::Other);
        assert_eq!(classify(&"SIunit".into()), Category::Other);
    }

    #[test]
    fn test_timestamp() {
        let t = DateTime::parse_from_rfc3339("2018-12-02T12:57:27.371444-08:00").unwrap();
        assert_eq!(classify(&t.into()), Category::Timestamp);
    }

    #[test]
    fn test_float_sequence_detection() {
        assert!(is_float_sequence(&[FieldValue::Float(1.0), FieldValue::Int(2)]));
        assert!(!is_float_sequence(&[FieldValue::Int(1), FieldValue::Float(2.0)]));
        assert!(!is_float_sequence(&[]));
    }

    #[test]
    fn test_sequence_categories() {
        assert!(Category::EmptySequence.is_sequence());
        assert!(Category::ScalarSequence.is_sequence());
        assert!(!Category::NestedData.is_sequence());
        assert!(!Category::ContainerMapping.is_sequence());
    }

    #[test]
    fn test_labels_are_kebab_case() {
        assert_eq!(Category::ContainerMapping.to_string(), "container-mapping");
        assert_eq!(
            serde_json::to_string(&Category::FloatLike).unwrap(),
            "\"float-like\""
        );
    }
}
