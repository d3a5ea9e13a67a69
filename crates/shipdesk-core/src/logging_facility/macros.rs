//! Boundary event macros
//!
//! Each macro emits one `tracing` event tagged with the calling module, the
//! operation name and one of the `start` / `end` / `end_error` event names.
//! Extra `key = value` fields are forwarded to `tracing` as written, so the
//! usual `?` and `%` sigils work. The macros reach `tracing` and the schema
//! through this crate, so callers need neither as a dependency.

/// Emit the `start` event for `$op`
///
/// ```
/// # use shipdesk_core::log_op_start;
/// log_op_start!("import_snapshot");
/// log_op_start!("import_snapshot", rows = 12);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__private::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::__private::schema::EVENT_START,
            $($($field)*)?
        );
    };
}

/// Emit the `end` event for `$op`; `duration_ms` is mandatory
///
/// ```
/// # use shipdesk_core::log_op_end;
/// log_op_end!("export_snapshot", duration_ms = 42);
/// log_op_end!("export_snapshot", duration_ms = 42, rows = 7);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__private::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::__private::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)*)?
        );
    };
}

/// Emit the `end_error` event for `$op` at error level
///
/// `$err` may be any value with an `Into<ExError>` conversion
/// ([`ExError`](crate::errors::ExError) itself, `OrderingError`,
/// `CodecError`). The event records its kind, stable code and message.
///
/// ```
/// # use shipdesk_core::log_op_error;
/// # use shipdesk_core::errors::{ExError, ExErrorKind};
/// let err = ExError::new(ExErrorKind::ConstraintViolation);
/// log_op_error!("import_snapshot", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let failure: $crate::errors::ExError = $err.into();
        $crate::__private::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::__private::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?failure.kind(),
            err_code = failure.code(),
            err = %failure,
            $($($field)*)?
        );
    }};
}
