//! Logging context for errlog.
//!
//! An [`ErrorContext`] decides whether and where
//! [`ErrorRecord`](errlog_record::ErrorRecord)s are written. It moves
//! between two states:
//!
//! ```text
//! uninitialized --init()--> initialized --cleanup()--> uninitialized
//! ```
//!
//! While initialized it can be switched on and off and pointed at a log
//! file (or an in-memory buffer). Each logged record becomes one line at
//! the destination, rendered by [`render`].
//!
//! All state sits behind a single lock, so one context can be shared
//! between threads and no log write ever sees a half-switched destination.

mod config;
mod context;
mod destination;
mod error;
pub mod render;

pub use config::ContextConfig;
pub use context::ErrorContext;
pub use error::ContextError;
pub use render::{render, RecordFormat};
