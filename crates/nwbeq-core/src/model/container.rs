use std::collections::BTreeMap;

use super::value::FieldValue;

/// Field under which every container stores its name
pub const NAME_FIELD: &str = "name";

/// Container - a named, typed node in a data hierarchy
///
/// A Container owns its field values. Which fields are compared is not
/// decided here: the declared field set for a type tag lives in the
/// [`TypeRegistry`](super::registry::TypeRegistry), so two containers of the
/// same type are always walked over the same ordered field list.
#[derive(Debug, Clone)]
pub struct Container {
    type_tag: String,
    fields: BTreeMap<String, FieldValue>,
}

impl Container {
    /// Create a new Container with the given type tag and name
    ///
    /// The name is stored as the `name` field, so it takes part in a
    /// comparison whenever the type's descriptor declares `name`.
    pub fn new(type_tag: impl Into<String>, name: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(NAME_FIELD.to_string(), FieldValue::Str(name.into()));
        Self {
            type_tag: type_tag.into(),
            fields,
        }
    }

    /// Builder-style field assignment
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set_field(name, value);
        self
    }

    /// Set (or replace) a field value
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Remove a field, returning its previous value
    pub fn remove_field(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.remove(name)
    }

    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    /// The container's name, or an empty string if the name field is not a string
    pub fn name(&self) -> &str {
        match self.fields.get(NAME_FIELD) {
            Some(FieldValue::Str(name)) => name,
            _ => "",
        }
    }

    /// Label used as the root segment of failure paths
    pub fn label(&self) -> &str {
        let name = self.name();
        if name.is_empty() {
            &self.type_tag
        } else {
            name
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterate over all stored fields in key order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}
