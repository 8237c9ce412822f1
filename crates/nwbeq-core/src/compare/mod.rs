//! Structural equivalence comparison.
//!
//! ## Entry points
//!
//! ```
//! use nwbeq_core::compare::{render_report, Comparator};
//! use nwbeq_core::model::{Container, TypeRegistry};
//!
//! let registry = TypeRegistry::new().with_type("Device", &["name", "description"]);
//! let expected = Container::new("Device", "probe").with_field("description", "silicon");
//! let actual = expected.clone();
//!
//! let comparator = Comparator::new(&registry);
//! assert!(comparator.compare(&expected, &actual).is_ok());
//!
//! let report = comparator.check(&expected, &actual);
//! println!("{}", render_report(&report));
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: fields are visited in declaration order, mapping keys in
//!   key order, sequences by index.
//! - **Expected-side dispatch**: the expected value's category chooses the
//!   rule; an actual value of an incompatible category is a type mismatch.
//! - **Full paths**: every mismatch names the path from the root container.

pub mod data_adapter;
pub mod engine;
pub mod human_summary;
pub mod leaf;
pub mod report;

pub use data_adapter::{compare_data, compare_data_with_sequence};
pub use engine::Comparator;
pub use human_summary::render_report;
pub use leaf::compare_elements;
pub use report::ComparisonReport;
