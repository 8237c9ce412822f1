use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::classify::Category;
use crate::path::FieldPath;

/// Result type alias for comparison operations
pub type Result<T> = std::result::Result<T, Mismatch>;

// ========== Mismatch Facility ==========

/// Canonical mismatch kind taxonomy
///
/// Each kind maps to a stable code usable by harnesses for programmatic
/// handling and by tests for assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchKind {
    /// Type tags or value categories differ
    TypeMismatch,
    /// A declared field or mapping key is absent on one side
    FieldMissing,
    /// Sequence or data handle lengths differ
    LengthMismatch,
    /// Leaf values differ beyond tolerance
    ValueMismatch,
    /// Recursion guard tripped
    StructureTooDeep,
}

impl MismatchKind {
    /// Get the stable code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            MismatchKind::TypeMismatch => "ERR_TYPE_MISMATCH",
            MismatchKind::FieldMissing => "ERR_FIELD_MISSING",
            MismatchKind::LengthMismatch => "ERR_LENGTH_MISMATCH",
            MismatchKind::ValueMismatch => "ERR_VALUE_MISMATCH",
            MismatchKind::StructureTooDeep => "ERR_STRUCTURE_TOO_DEEP",
        }
    }
}

/// Which side of a comparison a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Expected,
    Actual,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Expected => f.write_str("expected"),
            Side::Actual => f.write_str("actual"),
        }
    }
}

/// Tolerance applied when a leaf comparison failed
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Tolerance {
    /// Absolute float tolerance
    Absolute(f64),
    /// Timestamp window around the expected value, in microseconds
    WindowMicros(i64),
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tolerance::Absolute(tol) => write!(f, "±{:e}", tol),
            Tolerance::WindowMicros(us) => write!(f, "±{}us", us),
        }
    }
}

fn tolerance_suffix(tolerance: &Option<Tolerance>) -> String {
    tolerance
        .map(|t| format!(" (tolerance {})", t))
        .unwrap_or_default()
}

/// What exactly differed, with the values needed to act on it
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "detail", rename_all = "snake_case")]
pub enum MismatchDetail {
    /// Two containers carry different type tags
    #[error("type tag `{actual}` does not match expected `{expected}`")]
    TypeTag { expected: String, actual: String },

    /// A value's category is incompatible with the expected side's
    #[error("value category `{actual}` is not comparable with expected `{expected}`")]
    Category { expected: Category, actual: Category },

    /// No declared field set exists for the container's type tag
    #[error("no field descriptor registered for type `{type_tag}`")]
    UnregisteredType { type_tag: String },

    /// A declared field is absent on one side
    #[error("declared field `{field}` is absent on the {side} side")]
    FieldAbsent { field: String, side: Side },

    /// Mapping key sets differ
    #[error(
        "mapping keys differ (only in expected: [{}]; only in actual: [{}])",
        .only_expected.join(", "),
        .only_actual.join(", ")
    )]
    KeySet {
        only_expected: Vec<String>,
        only_actual: Vec<String>,
    },

    /// Sequence or data handle lengths differ
    #[error("length {actual} does not match expected length {expected}")]
    Length { expected: usize, actual: usize },

    /// Leaf values differ beyond tolerance
    #[error("value {actual} does not match expected {expected}{}", tolerance_suffix(.tolerance))]
    Value {
        expected: String,
        actual: String,
        tolerance: Option<Tolerance>,
    },

    /// Recursion guard tripped
    #[error("nesting exceeds {limit} container levels (structure too deep or cyclic)")]
    TooDeep { limit: usize },
}

impl MismatchDetail {
    /// The taxonomy kind this detail belongs to
    pub fn kind(&self) -> MismatchKind {
        match self {
            MismatchDetail::TypeTag { .. }
            | MismatchDetail::Category { .. }
            | MismatchDetail::UnregisteredType { .. } => MismatchKind::TypeMismatch,
            MismatchDetail::FieldAbsent { .. } | MismatchDetail::KeySet { .. } => {
                MismatchKind::FieldMissing
            }
            MismatchDetail::Length { .. } => MismatchKind::LengthMismatch,
            MismatchDetail::Value { .. } => MismatchKind::ValueMismatch,
            MismatchDetail::TooDeep { .. } => MismatchKind::StructureTooDeep,
        }
    }

    /// Names of the fields or keys reported missing, if this is a FieldMissing detail
    pub fn missing_names(&self) -> Vec<&str> {
        match self {
            MismatchDetail::FieldAbsent { field, .. } => vec![field.as_str()],
            MismatchDetail::KeySet {
                only_expected,
                only_actual,
            } => only_expected
                .iter()
                .chain(only_actual.iter())
                .map(String::as_str)
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Canonical structured mismatch
///
/// Carries the taxonomy kind, the full path from the root container, the
/// type of the container owning the failing field and the detail payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mismatch {
    kind: MismatchKind,
    code: &'static str,
    path: FieldPath,
    container_type: Option<String>,
    detail: MismatchDetail,
}

impl Mismatch {
    /// Create a mismatch at the given path
    pub fn new(path: FieldPath, detail: MismatchDetail) -> Self {
        let kind = detail.kind();
        Self {
            kind,
            code: kind.code(),
            path,
            container_type: None,
            detail,
        }
    }

    /// Add container type context
    pub fn with_container_type(mut self, type_tag: impl Into<String>) -> Self {
        self.container_type = Some(type_tag.into());
        self
    }

    /// Add container type context unless a more specific one is already set
    pub fn within(mut self, type_tag: &str) -> Self {
        if self.container_type.is_none() {
            self.container_type = Some(type_tag.to_string());
        }
        self
    }

    /// Get the mismatch kind
    pub fn kind(&self) -> MismatchKind {
        self.kind
    }

    /// Get the stable code
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full path from the root
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Get the type of the container owning the failing field, if known
    pub fn container_type(&self) -> Option<&str> {
        self.container_type.as_deref()
    }

    /// Get the innermost declared field on the path, if any
    pub fn field(&self) -> Option<&str> {
        self.path.leaf_field()
    }

    /// Get the detail payload
    pub fn detail(&self) -> &MismatchDetail {
        &self.detail
    }

    /// Human-readable message for the detail
    pub fn message(&self) -> String {
        self.detail.to_string()
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.path)?;
        if let Some(container_type) = &self.container_type {
            write!(f, " (in {})", container_type)?;
        }
        write!(f, ": {}", self.detail)
    }
}

impl std::error::Error for Mismatch {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.detail)
    }
}

// ========== End Mismatch Facility ==========

/// Errors raised while loading comparison options
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Options file could not be read
    #[error("Failed to read options file {path}: {message}")]
    Io { path: String, message: String },

    /// Options document is not valid TOML for the options schema
    #[error("Options parse error: {message}")]
    Parse { message: String },

    /// An option has an out-of-range value
    #[error("Invalid option `{field}`: {reason}")]
    Invalid { field: String, reason: String },
}
