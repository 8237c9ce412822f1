//! Nesting paths used in failure diagnostics.
//!
//! A path starts at the root container's label and accumulates one segment
//! per step of the walk, rendering as `root.children[1].rate` or
//! `file.processing["test_module"].description`.

use serde::{Serialize, Serializer};
use std::fmt;

/// One step from a container into one of its values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Declared field on a container
    Field(String),
    /// Position in a sequence or data handle
    Index(usize),
    /// Key in a mapping
    Key(String),
}

/// Full path from the root container to a value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldPath {
    root: String,
    segments: Vec<PathSegment>,
}

impl FieldPath {
    pub fn root(label: impl Into<String>) -> Self {
        Self {
            root: label.into(),
            segments: Vec::new(),
        }
    }

    /// Path extended by a field segment
    pub fn field(&self, name: &str) -> Self {
        self.child(PathSegment::Field(name.to_string()))
    }

    /// Path extended by an index segment
    pub fn index(&self, index: usize) -> Self {
        self.child(PathSegment::Index(index))
    }

    /// Path extended by a mapping-key segment
    pub fn key(&self, key: &str) -> Self {
        self.child(PathSegment::Key(key.to_string()))
    }

    fn child(&self, segment: PathSegment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self {
            root: self.root.clone(),
            segments,
        }
    }

    pub fn root_label(&self) -> &str {
        &self.root
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Name of the innermost field segment, if any
    pub fn leaf_field(&self) -> Option<&str> {
        self.segments.iter().rev().find_map(|s| match s {
            PathSegment::Field(name) => Some(name.as_str()),
            _ => None,
        })
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root)?;
        for segment in &self.segments {
            match segment {
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(i) => write!(f, "[{}]", i)?,
                PathSegment::Key(key) => write!(f, "[{:?}]", key)?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
