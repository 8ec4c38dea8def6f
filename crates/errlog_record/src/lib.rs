//! Error records for errlog.
//!
//! An [`ErrorRecord`] describes one error occurrence:
//! - What happened (an [`ErrorKind`])
//! - Where it happened (file, function, line)
//! - A free-form message
//!
//! Records are plain owned values. Dropping a record releases it, so a
//! double release cannot be written. Callers that pass records around by
//! handle (C-style `Init`/`Destroy` pairs) use a [`RecordStore`], which
//! checks every handle and reports stale ones as
//! [`ErrorKind::DoubleFree`] or [`ErrorKind::UseAfterFree`].
//!
//! ```text
//! let record = error_record!(ErrorKind::IoFailure, "could not open config")?;
//! assert_eq!(record.line(), line!() - 1);
//! ```

mod error;
mod kind;
mod macros;
mod record;
mod store;

pub use error::{Classify, RecordError};
pub use kind::ErrorKind;
pub use record::ErrorRecord;
pub use store::{RecordHandle, RecordStore};

#[doc(hidden)]
pub use macros::{file_name, trim_function_path};
