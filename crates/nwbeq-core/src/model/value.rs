use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::container::Container;
use super::data::DataHandle;

/// Number of sequence elements rendered before the display is elided
const DISPLAY_ELEMENTS: usize = 8;

/// A value bound to a declared field on a [`Container`]
///
/// Sequences are heterogeneous on purpose: producers hand back whatever
/// their backend stores (rows of floats, lists of child containers, lists
/// of data handles) and the classifier decides how a field is compared by
/// inspecting its shape.
#[derive(Debug, Clone)]
pub enum FieldValue {
    /// Field is declared but unset
    None,
    Bool(bool),
    Int(i64),
    Str(String),
    Float(f64),
    /// Low-precision float as stored by some backends
    Float32(f32),
    Sequence(Vec<FieldValue>),
    /// Named values, ordered by key
    Mapping(BTreeMap<String, FieldValue>),
    Container(Arc<Container>),
    Data(Arc<dyn DataHandle>),
    Timestamp(DateTime<FixedOffset>),
}

impl FieldValue {
    /// Wrap a data handle
    pub fn data(handle: impl DataHandle + 'static) -> Self {
        FieldValue::Data(Arc::new(handle))
    }

    /// Build a mapping from `(name, value)` pairs
    pub fn mapping<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        FieldValue::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Float view of `Float` and `Float32` values
    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(v) => Some(*v),
            FieldValue::Float32(v) => Some(f64::from(*v)),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&BTreeMap<String, FieldValue>> {
        match self {
            FieldValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            FieldValue::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_data(&self) -> Option<&dyn DataHandle> {
        match self {
            FieldValue::Data(d) => Some(d.as_ref()),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            FieldValue::Timestamp(t) => Some(t),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, FieldValue::None)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::None => write!(f, "None"),
            FieldValue::Bool(v) => write!(f, "{}", v),
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::Str(v) => write!(f, "{:?}", v),
            FieldValue::Float(v) => write!(f, "{:?}", v),
            FieldValue::Float32(v) => write!(f, "{:?}f32", v),
            FieldValue::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().take(DISPLAY_ELEMENTS).enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                if items.len() > DISPLAY_ELEMENTS {
                    write!(f, ", ... ({} total)", items.len())?;
                }
                write!(f, "]")
            }
            FieldValue::Mapping(map) => {
                let keys: Vec<&str> = map.keys().map(String::as_str).collect();
                write!(f, "{{{}}}", keys.join(", "))
            }
            FieldValue::Container(c) => write!(f, "<{} {:?}>", c.type_tag(), c.name()),
            FieldValue::Data(d) => write!(f, "<data {} len={}>", d.type_tag(), d.len()),
            FieldValue::Timestamp(t) => write!(f, "{}", t.to_rfc3339()),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(i64::from(v))
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        FieldValue::Float32(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Str(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Str(v)
    }
}

impl From<Container> for FieldValue {
    fn from(v: Container) -> Self {
        FieldValue::Container(Arc::new(v))
    }
}

impl From<Arc<Container>> for FieldValue {
    fn from(v: Arc<Container>) -> Self {
        FieldValue::Container(v)
    }
}

impl From<Arc<dyn DataHandle>> for FieldValue {
    fn from(v: Arc<dyn DataHandle>) -> Self {
        FieldValue::Data(v)
    }
}

impl From<DateTime<FixedOffset>> for FieldValue {
    fn from(v: DateTime<FixedOffset>) -> Self {
        FieldValue::Timestamp(v)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(FieldValue::None, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::data::InMemoryData;

    #[test]
    fn test_float_view_covers_both_precisions() {
        assert_eq!(FieldValue::Float(0.5).as_float(), Some(0.5));
        assert_eq!(FieldValue::Float32(0.5).as_float(), Some(0.5));
        assert_eq!(FieldValue::Int(1).as_float(), None);
    }

    #[test]
    fn test_vec_conversion_builds_sequence() {
        let v: FieldValue = vec![1.0, 2.0].into();
        assert_eq!(v.as_sequence().map(<[FieldValue]>::len), Some(2));
    }

    #[test]
    fn test_option_conversion() {
        let unset: FieldValue = Option::<i64>::None.into();
        assert!(unset.is_none());
        let set: FieldValue = Some("x").into();
        assert!(matches!(set, FieldValue::Str(ref s) if s == "x"));
    }

    #[test]
    fn test_display_elides_long_sequences() {
        let v: FieldValue = (0..20i64).collect::<Vec<i64>>().into();
        let shown = v.to_string();
        assert!(shown.starts_with("[0, 1, 2"));
        assert!(shown.contains("(20 total)"));
    }

    #[test]
    fn test_display_of_handles_and_containers() {
        let d = FieldValue::data(InMemoryData::new("VectorData", vec![1.0, 2.0]));
        assert_eq!(d.to_string(), "<data VectorData len=2>");

        let c: FieldValue = Container::new("Device", "dev1").into();
        assert_eq!(c.to_string(), "<Device \"dev1\">");
    }

    #[test]
    fn test_mapping_builder_orders_keys() {
        let m = FieldValue::mapping([("b", 2i64), ("a", 1i64)]);
        let keys: Vec<&String> = m.as_mapping().unwrap().keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
