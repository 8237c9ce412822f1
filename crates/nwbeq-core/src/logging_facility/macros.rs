//! Canonical logging macros

/// Log the start of an operation
///
/// ```
/// # use nwbeq_core::log_op_start;
/// log_op_start!("compare");
/// log_op_start!("compare", type_tag = "TimeSeries");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {{
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::nwbeq_core_types::schema::EVENT_START,
        );
    }};
    ($op:expr, $($field:tt)*) => {{
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::nwbeq_core_types::schema::EVENT_START,
            $($field)*
        );
    }};
}

/// Log the successful end of an operation
///
/// ```
/// # use nwbeq_core::log_op_end;
/// log_op_end!("compare", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {{
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::nwbeq_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    }};
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::nwbeq_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    }};
}

/// Log an operation that ended in a mismatch
///
/// ```
/// # use nwbeq_core::log_op_error;
/// # use nwbeq_core::errors::{Mismatch, MismatchDetail};
/// # use nwbeq_core::path::FieldPath;
/// let m = Mismatch::new(FieldPath::root("ts"), MismatchDetail::Length { expected: 2, actual: 1 });
/// log_op_error!("compare", m, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let mismatch = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::nwbeq_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?mismatch.kind(),
            err.code = mismatch.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let mismatch = &$err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::nwbeq_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?mismatch.kind(),
            err.code = mismatch.code(),
            $($field)*
        );
    }};
}
