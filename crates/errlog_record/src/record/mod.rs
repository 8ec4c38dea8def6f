//! The [`ErrorRecord`] value type.

use crate::{ErrorKind, RecordError};

/// One error occurrence: what happened, where, and why.
///
/// Fields are fixed at construction. There are no setters; build a new
/// record instead.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "error records should be logged or returned, not silently dropped"]
pub struct ErrorRecord {
    code: ErrorKind,
    line: u32,
    function: String,
    file: String,
    message: String,
}

impl ErrorRecord {
    /// Build a record from its parts.
    ///
    /// `function` and `file` must be non-empty. `message` may be empty.
    /// Storage for all three strings is reserved up front; if that fails the
    /// call returns [`RecordError::AllocationFailure`] and nothing is kept.
    pub fn new(
        code: ErrorKind,
        line: u32,
        function: &str,
        file: &str,
        message: &str,
    ) -> Result<Self, RecordError> {
        if function.is_empty() {
            return Err(RecordError::InvalidArgument { field: "function" });
        }
        if file.is_empty() {
            return Err(RecordError::InvalidArgument { field: "file" });
        }

        Ok(ErrorRecord {
            code,
            line,
            function: copy_str(function)?,
            file: copy_str(file)?,
            message: copy_str(message)?,
        })
    }

    pub fn code(&self) -> ErrorKind {
        self.code
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Copy `s` into a fresh `String`, reporting allocation failure instead of aborting.
fn copy_str(s: &str) -> Result<String, RecordError> {
    let mut owned = String::new();
    owned
        .try_reserve_exact(s.len())
        .map_err(|_| RecordError::AllocationFailure)?;
    owned.push_str(s);
    Ok(owned)
}
