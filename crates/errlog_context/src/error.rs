//! Context operation errors.

use std::io;
use std::path::PathBuf;

use errlog_record::{Classify, ErrorKind, RecordError};

/// Errors from [`ErrorContext`](crate::ErrorContext) operations.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("error context is not initialized")]
    NotInitialized,

    #[error("error context is already initialized")]
    AlreadyInitialized,

    #[error("log file path must not be empty")]
    InvalidPath,

    #[error("log file `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The line reached the file but `sync_data` failed afterwards.
    ///
    /// Retrying the log call would append the record a second time.
    #[error("log file `{}`: record appended but not synced: {source}", .path.display())]
    Sync {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("logging is enabled but no log destination was set")]
    NoDestinationConfigured,

    #[error(transparent)]
    Record(#[from] RecordError),
}

impl ContextError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ContextError::Io {
            path: path.into(),
            source,
        }
    }
}

impl Classify for ContextError {
    fn kind(&self) -> ErrorKind {
        match self {
            ContextError::NotInitialized => ErrorKind::NotInitialized,
            ContextError::AlreadyInitialized => ErrorKind::AlreadyInitialized,
            ContextError::InvalidPath => ErrorKind::InvalidPath,
            ContextError::Io { .. } | ContextError::Sync { .. } => ErrorKind::IoFailure,
            ContextError::NoDestinationConfigured => ErrorKind::NoDestinationConfigured,
            ContextError::Record(err) => err.kind(),
        }
    }
}
