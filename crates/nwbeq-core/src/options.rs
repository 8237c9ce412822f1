//! Comparison options and their TOML loader
//!
//! Every option has a default, so an empty document (or no document at
//! all) yields the standard tolerances:
//!
//! ```toml
//! float_tolerance = 1e-6
//! timestamp_window_us = 1000
//! max_depth = 256
//! length_policy = "strict"
//! data_content = "best-effort"
//! ```

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::ConfigError;

/// Default absolute float tolerance (6 decimal places)
pub const DEFAULT_FLOAT_TOLERANCE: f64 = 1e-6;
/// Default timestamp window (1 ms)
pub const DEFAULT_TIMESTAMP_WINDOW_US: i64 = 1_000;
/// Default container recursion cap
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// How container and data sequences of different lengths are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LengthPolicy {
    /// Any length difference is a LengthMismatch
    #[default]
    Strict,
    /// Pair elements positionally and ignore the surplus of the longer side
    Lenient,
}

/// How much of two data handles' content is inspected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataContentMode {
    /// Compare content elementwise whenever both handles can materialize it
    #[default]
    BestEffort,
    /// Type tag and length only
    LengthOnly,
}

/// Tunable comparison behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareOptions {
    pub float_tolerance: f64,
    pub timestamp_window_us: i64,
    pub max_depth: usize,
    pub length_policy: LengthPolicy,
    pub data_content: DataContentMode,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            float_tolerance: DEFAULT_FLOAT_TOLERANCE,
            timestamp_window_us: DEFAULT_TIMESTAMP_WINDOW_US,
            max_depth: DEFAULT_MAX_DEPTH,
            length_policy: LengthPolicy::Strict,
            data_content: DataContentMode::BestEffort,
        }
    }
}

impl CompareOptions {
    pub fn with_float_tolerance(mut self, tolerance: f64) -> Self {
        self.float_tolerance = tolerance;
        self
    }

    pub fn with_timestamp_window_us(mut self, window_us: i64) -> Self {
        self.timestamp_window_us = window_us;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_length_policy(mut self, policy: LengthPolicy) -> Self {
        self.length_policy = policy;
        self
    }

    pub fn with_data_content(mut self, mode: DataContentMode) -> Self {
        self.data_content = mode;
        self
    }

    /// Timestamp window as a duration
    pub fn timestamp_window(&self) -> Duration {
        Duration::microseconds(self.timestamp_window_us)
    }

    /// Check option ranges
    ///
    /// # Errors
    ///
    /// `ConfigError::Invalid` naming the first out-of-range option.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.float_tolerance.is_finite() || self.float_tolerance < 0.0 {
            return Err(invalid(
                "float_tolerance",
                format!("must be a finite, non-negative number, got {}", self.float_tolerance),
            ));
        }
        if self.timestamp_window_us < 0 {
            return Err(invalid(
                "timestamp_window_us",
                format!("must be non-negative, got {}", self.timestamp_window_us),
            ));
        }
        if self.max_depth == 0 {
            return Err(invalid("max_depth", "must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: String) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason,
    }
}

/// Parse options from a TOML string
///
/// # Errors
///
/// - `Parse` if the document is not valid TOML or has unknown keys
/// - `Invalid` if a value is out of range
pub fn parse_options_str(content: &str) -> Result<CompareOptions, ConfigError> {
    let options: CompareOptions = toml::from_str(content).map_err(|e| ConfigError::Parse {
        message: e.to_string(),
    })?;

    options.validate()?;

    Ok(options)
}

/// Parse options from a TOML file
///
/// # Errors
///
/// `Io` if the file cannot be read, otherwise as [`parse_options_str`].
pub fn parse_options_file(path: &Path) -> Result<CompareOptions, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    parse_options_str(&content)
}
