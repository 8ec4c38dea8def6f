//! The [`ErrorContext`] state machine.

use std::path::{Path, PathBuf};

use errlog_record::ErrorRecord;
use parking_lot::{const_mutex, Mutex};

use crate::destination::{Destination, FileDestination};
use crate::{render, ContextConfig, ContextError};

/// Runtime state, reset by every `init()` and `cleanup()`.
#[derive(Debug)]
struct ContextState {
    initialized: bool,
    logging_enabled: bool,
    destination: Destination,
}

impl ContextState {
    const fn dead() -> Self {
        ContextState {
            initialized: false,
            logging_enabled: false,
            destination: Destination::Unset,
        }
    }

    /// Fail with `NotInitialized` unless the context is live.
    fn live(&mut self) -> Result<&mut Self, ContextError> {
        if self.initialized {
            Ok(self)
        } else {
            tracing::warn!("error context used while not initialized");
            Err(ContextError::NotInitialized)
        }
    }
}

/// Decides whether and where error records are logged.
///
/// A new context is *not* initialized; call [`init`](Self::init) first.
/// Every operation locks the whole state for its duration.
pub struct ErrorContext {
    config: ContextConfig,
    state: Mutex<ContextState>,
}

impl ErrorContext {
    /// Create an uninitialized context with the default config.
    pub const fn new() -> Self {
        Self::with_config(ContextConfig::new())
    }

    /// Create an uninitialized context.
    pub const fn with_config(config: ContextConfig) -> Self {
        ErrorContext {
            config,
            state: const_mutex(ContextState::dead()),
        }
    }

    /// Bring the context up: logging off, no destination.
    ///
    /// Fails with `AlreadyInitialized` if it is already live; the running
    /// configuration is left untouched in that case.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn init(&self) -> Result<(), ContextError> {
        let mut state = self.state.lock();
        if state.initialized {
            tracing::warn!("error context initialized twice");
            return Err(ContextError::AlreadyInitialized);
        }
        *state = ContextState {
            initialized: true,
            ..ContextState::dead()
        };
        tracing::debug!("error context initialized");
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn set_log_on(&self) -> Result<(), ContextError> {
        self.set_logging(true)
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn set_log_off(&self) -> Result<(), ContextError> {
        self.set_logging(false)
    }

    /// Turn logging on or off.
    pub fn set_logging(&self, enabled: bool) -> Result<(), ContextError> {
        let mut state = self.state.lock();
        state.live()?.logging_enabled = enabled;
        tracing::debug!(enabled, "logging toggled");
        Ok(())
    }

    /// Point the context at `path`, opened for append and created if missing.
    ///
    /// The new file is opened before the old destination is closed: on any
    /// failure the previous destination stays in place.
    #[tracing::instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn set_log_file(&self, path: impl AsRef<Path>) -> Result<(), ContextError> {
        let path = path.as_ref();
        let mut state = self.state.lock();
        let state = state.live()?;
        if path.as_os_str().is_empty() {
            return Err(ContextError::InvalidPath);
        }

        let file = FileDestination::open(path).inspect_err(|err| {
            tracing::warn!(%err, "could not open log file");
        })?;
        state.destination = Destination::File(file);
        tracing::debug!("log file opened");
        Ok(())
    }

    /// Send records to an in-memory buffer, closing any open file.
    ///
    /// Read it back with [`buffered_output`](Self::buffered_output).
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn set_log_buffer(&self) -> Result<(), ContextError> {
        let mut state = self.state.lock();
        state.live()?.destination = Destination::Buffer(String::new());
        Ok(())
    }

    /// Everything captured by the buffer destination so far.
    ///
    /// Empty when the destination is not a buffer.
    pub fn buffered_output(&self) -> Result<String, ContextError> {
        let mut state = self.state.lock();
        Ok(state.live()?.destination.buffered().to_owned())
    }

    /// Append `record` to the destination if logging is enabled.
    ///
    /// With logging disabled this succeeds without touching the destination.
    #[tracing::instrument(level = "debug", skip_all, fields(code = %record.code()))]
    pub fn log_error(&self, record: &ErrorRecord) -> Result<(), ContextError> {
        let mut state = self.state.lock();
        let state = state.live()?;
        if !state.logging_enabled {
            return Ok(());
        }

        let line = render(record, self.config.format);
        state
            .destination
            .append(&line, self.config.sync_each_write)
            .inspect_err(|err| tracing::warn!(%err, "record not logged"))?;
        tracing::trace!(line = line.trim_end(), "record logged");
        Ok(())
    }

    /// Tear the context down, closing the destination.
    ///
    /// Fails with `NotInitialized` if there is nothing to tear down.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn cleanup(&self) -> Result<(), ContextError> {
        let mut state = self.state.lock();
        let had_destination = state.live()?.destination.is_set();
        // Dropping the old state closes the file.
        *state = ContextState::dead();
        tracing::debug!(had_destination, "error context cleaned up");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.state.lock().initialized
    }

    /// Whether logging is on. Always `false` for a dead context.
    pub fn is_logging_enabled(&self) -> bool {
        let state = self.state.lock();
        state.initialized && state.logging_enabled
    }

    /// Path of the current log file, if the destination is a file.
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.state.lock().destination.path().map(Path::to_path_buf)
    }

    pub fn config(&self) -> ContextConfig {
        self.config
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
