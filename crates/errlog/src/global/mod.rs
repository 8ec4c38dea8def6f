//! Process-wide error context.
//!
//! One static [`ErrorContext`] and one static [`RecordStore`], exposed as
//! free functions for callers written against an `init`/`cleanup` API:
//!
//! ```text
//! global::init_global_ctx()?;
//! global::set_log_on()?;
//! global::set_log_file("./errorlog.txt")?;
//! let rec = global::init_error_struct(ErrorKind::Success, 12, "main", "main.rs", "hi")?;
//! global::log_error(rec)?;
//! global::cleanup_global_ctx()?;
//! global::destroy_error_struct(rec)?;
//! ```
//!
//! Records live in the store, not in the context, so they outlive a
//! `cleanup_global_ctx()` and must be destroyed separately. The two locks
//! are never held at the same time.

use std::path::Path;

use errlog_context::{ContextError, ErrorContext};
use errlog_record::{ErrorKind, ErrorRecord, RecordError, RecordHandle, RecordStore};
use parking_lot::{const_mutex, Mutex};

static CONTEXT: ErrorContext = ErrorContext::new();
static RECORDS: Mutex<RecordStore> = const_mutex(RecordStore::new());

pub fn init_global_ctx() -> Result<(), ContextError> {
    CONTEXT.init()
}

pub fn set_log_on() -> Result<(), ContextError> {
    CONTEXT.set_log_on()
}

pub fn set_log_off() -> Result<(), ContextError> {
    CONTEXT.set_log_off()
}

pub fn set_log_file(path: impl AsRef<Path>) -> Result<(), ContextError> {
    CONTEXT.set_log_file(path)
}

/// Log the record behind `handle` through the process-wide context.
///
/// A destroyed handle fails with `UseAfterFree` before the context is
/// consulted.
pub fn log_error(handle: RecordHandle) -> Result<(), ContextError> {
    let record = RECORDS.lock().get(handle)?.clone();
    CONTEXT.log_error(&record)
}

pub fn cleanup_global_ctx() -> Result<(), ContextError> {
    CONTEXT.cleanup()
}

pub fn is_initialized() -> bool {
    CONTEXT.is_initialized()
}

/// Build a record and store it, returning its handle.
///
/// Does not need a live context.
pub fn init_error_struct(
    code: ErrorKind,
    line: u32,
    function: &str,
    file: &str,
    message: &str,
) -> Result<RecordHandle, RecordError> {
    RECORDS.lock().create(code, line, function, file, message)
}

/// Store an already built record, returning its handle.
pub fn insert_record(record: ErrorRecord) -> Result<RecordHandle, RecordError> {
    RECORDS.lock().insert(record)
}

/// Release the record behind `handle`.
///
/// A second call with the same handle fails with `DoubleFree`.
pub fn destroy_error_struct(handle: RecordHandle) -> Result<(), RecordError> {
    RECORDS.lock().destroy(handle).map(drop)
}

/// Number of records created and not yet destroyed.
pub fn live_records() -> usize {
    RECORDS.lock().live_count()
}
