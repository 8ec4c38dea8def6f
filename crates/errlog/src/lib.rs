//! errlog: structured error records and a switchable log file.
//!
//! Two ways in:
//! - Explicit: own an [`ErrorContext`], build [`ErrorRecord`]s, pass them in.
//! - Process-wide: the [`global`] functions wrap one static context and one
//!   static [`RecordStore`] for callers that want C-style `init`/`cleanup`
//!   calls and record handles.
//!
//! ```text
//! let ctx = ErrorContext::new();
//! ctx.init()?;
//! ctx.set_log_on()?;
//! ctx.set_log_file("./errorlog.txt")?;
//! ctx.log_error(&error_record!(ErrorKind::IoFailure, "disk full")?)?;
//! ctx.cleanup()?;
//! ```

pub mod global;

pub use errlog_context::{render, ContextConfig, ContextError, ErrorContext, RecordFormat};
pub use errlog_record::{
    error_record, Classify, ErrorKind, ErrorRecord, RecordError, RecordHandle, RecordStore,
};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=errlog_context=debug` or `RUST_LOG=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
