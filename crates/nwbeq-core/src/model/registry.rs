use std::collections::BTreeMap;

/// Declared shape of one container type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    type_tag: String,
    fields: Vec<String>,
}

impl TypeDescriptor {
    /// Create a descriptor; repeated field names keep their first position
    pub fn new<S: AsRef<str>>(type_tag: impl Into<String>, fields: &[S]) -> Self {
        let mut declared: Vec<String> = Vec::with_capacity(fields.len());
        for field in fields {
            let field = field.as_ref();
            if !declared.iter().any(|f| f == field) {
                declared.push(field.to_string());
            }
        }
        Self {
            type_tag: type_tag.into(),
            fields: declared,
        }
    }

    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    /// Declared field names in comparison order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn declares(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}

/// Static table of declared field sets keyed by type tag
///
/// Built once by the caller before any comparison; the comparator never
/// discovers fields from instances.
///
/// # Example
///
/// ```
/// use nwbeq_core::model::TypeRegistry;
///
/// let registry = TypeRegistry::new()
///     .with_type("Device", &["name", "description", "manufacturer"])
///     .with_type("ElectrodeGroup", &["name", "description", "location", "device"]);
///
/// assert_eq!(registry.len(), 2);
/// assert!(registry.descriptor("Device").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: BTreeMap<String, TypeDescriptor>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self {
            types: BTreeMap::new(),
        }
    }

    /// Builder-style registration
    pub fn with_type<S: AsRef<str>>(mut self, type_tag: &str, fields: &[S]) -> Self {
        self.register(TypeDescriptor::new(type_tag, fields));
        self
    }

    /// Register a descriptor, replacing any previous one for the same tag
    pub fn register(&mut self, descriptor: TypeDescriptor) -> Option<TypeDescriptor> {
        self.types
            .insert(descriptor.type_tag().to_string(), descriptor)
    }

    pub fn descriptor(&self, type_tag: &str) -> Option<&TypeDescriptor> {
        self.types.get(type_tag)
    }

    pub fn contains(&self, type_tag: &str) -> bool {
        self.types.contains_key(type_tag)
    }

    /// Registered type tags in sorted order
    pub fn type_tags(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_preserves_declared_order() {
        let d = TypeDescriptor::new("TimeSeries", &["name", "data", "timestamps", "resolution"]);
        assert_eq!(d.fields(), &["name", "data", "timestamps", "resolution"]);
    }

    #[test]
    fn test_descriptor_drops_repeated_fields() {
        let d = TypeDescriptor::new("TimeSeries", &["data", "rate", "data"]);
        assert_eq!(d.fields(), &["data", "rate"]);
        assert!(d.declares("rate"));
        assert!(!d.declares("unit"));
    }

    #[test]
    fn test_register_replaces_previous_descriptor() {
        let mut registry = TypeRegistry::new().with_type("Device", &["name"]);
        let previous = registry.register(TypeDescriptor::new("Device", &["name", "description"]));

        assert_eq!(previous.map(|d| d.fields().len()), Some(1));
        assert_eq!(registry.descriptor("Device").unwrap().fields().len(), 2);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_type_tags_are_sorted() {
        let registry = TypeRegistry::new()
            .with_type("Units", &["name"])
            .with_type("Device", &["name"]);
        let tags: Vec<&str> = registry.type_tags().collect();
        assert_eq!(tags, vec!["Device", "Units"]);
    }

    #[test]
    fn test_unknown_tag_has_no_descriptor() {
        let registry = TypeRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.contains("Device"));
        assert!(registry.descriptor("Device").is_none());
    }
}
