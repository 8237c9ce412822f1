//! Structured logging facility for nwbeq
//!
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use nwbeq_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```
//!
//! Every comparison run emits one `start` event and exactly one of `end`
//! or `end_error`, all carrying the same `check_id`.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
