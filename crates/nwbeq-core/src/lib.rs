//! nwbeq Core - structural equivalence of hierarchical typed containers
//!
//! Decides whether two container graphs (a written one and one read back
//! from storage, typically) are equivalent field by field:
//! - Container/value model with a type registry of declared field sets
//! - Value classification driving per-category comparison rules
//! - Float tolerance, timestamp windows and exact leaf comparison
//! - Opaque data handles compared by type, length and available content
//! - Structured mismatches naming the full path from the root
//! - Field-isolated reports and test-harness assertions

pub mod classify;
pub mod compare;
pub mod errors;
pub mod harness;
pub mod logging_facility;
pub mod model;
pub mod options;
pub mod path;
pub mod tolerance;

pub use nwbeq_core_types;

// Re-export commonly used types
pub use classify::{classify, Category};
pub use compare::{render_report, Comparator, ComparisonReport};
pub use errors::{ConfigError, Mismatch, MismatchDetail, MismatchKind, Result};
pub use model::{Container, DataHandle, FieldValue, InMemoryData, LazyData, TypeRegistry};
pub use options::{parse_options_file, parse_options_str, CompareOptions};
pub use path::FieldPath;
