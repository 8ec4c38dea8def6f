//! Context configuration.

use crate::RecordFormat;

/// Settings fixed for the life of an [`ErrorContext`](crate::ErrorContext).
///
/// Survives `cleanup()`/`init()` cycles; only the runtime state (enabled
/// flag, destination) is reset.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ContextConfig {
    /// How each record is rendered to a line.
    pub format: RecordFormat,
    /// Flush each appended record to disk with `sync_data`.
    ///
    /// If the sync fails, `log_error` returns [`ContextError::Sync`](crate::ContextError::Sync)
    /// even though the line was appended; do not retry on that error.
    pub sync_each_write: bool,
}

impl ContextConfig {
    /// Text lines, no per-write sync.
    pub const fn new() -> Self {
        ContextConfig {
            format: RecordFormat::Text,
            sync_each_write: false,
        }
    }

    /// A config that syncs every record to disk before `log_error` returns.
    ///
    /// A sync failure surfaces as `ContextError::Sync`, not `ContextError::Io`:
    /// the record is already in the file and a retry would duplicate it.
    pub const fn durable() -> Self {
        ContextConfig {
            format: RecordFormat::Text,
            sync_each_write: true,
        }
    }

    #[must_use]
    pub const fn with_format(mut self, format: RecordFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub const fn with_sync_each_write(mut self, sync: bool) -> Self {
        self.sync_each_write = sync;
        self
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self::new()
    }
}
