//! Core types shared across nwbeq facilities
//!
//! - **Correlation types**: CheckId
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::CheckId;
