//! Error kinds shared by every errlog operation.
//!
//! An [`ErrorKind`] is both the `code` carried by an [`ErrorRecord`](crate::ErrorRecord)
//! and the discrete status an operation reports. `Success` is the only
//! non-failure kind.

use std::fmt;

/// Outcome categories for errlog operations and logged records.
///
/// The numeric [`code()`](ErrorKind::code) is stable: `Success` is `0` and
/// failures count up in declaration order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ErrorKind {
    /// No error.
    #[default]
    Success,
    /// The operation needs a live context and there is none.
    NotInitialized,
    /// Init was called on a context that is already live.
    AlreadyInitialized,
    /// Malformed input: an empty required string or an unknown handle.
    InvalidArgument,
    /// An empty log destination path.
    InvalidPath,
    /// Storage for a record could not be obtained.
    AllocationFailure,
    /// The log destination could not be opened or written.
    IoFailure,
    /// Logging is enabled but no destination was ever set.
    NoDestinationConfigured,
    /// A record handle was destroyed twice.
    DoubleFree,
    /// A record handle was used after it was destroyed.
    UseAfterFree,
}

impl ErrorKind {
    /// All error kinds, in `code()` order.
    pub const ALL: &[ErrorKind] = &[
        ErrorKind::Success,
        ErrorKind::NotInitialized,
        ErrorKind::AlreadyInitialized,
        ErrorKind::InvalidArgument,
        ErrorKind::InvalidPath,
        ErrorKind::AllocationFailure,
        ErrorKind::IoFailure,
        ErrorKind::NoDestinationConfigured,
        ErrorKind::DoubleFree,
        ErrorKind::UseAfterFree,
    ];

    /// Get the stable name (e.g., `"NOT_INITIALIZED"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Success => "SUCCESS",
            ErrorKind::NotInitialized => "NOT_INITIALIZED",
            ErrorKind::AlreadyInitialized => "ALREADY_INITIALIZED",
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ErrorKind::InvalidPath => "INVALID_PATH",
            ErrorKind::AllocationFailure => "ALLOCATION_FAILURE",
            ErrorKind::IoFailure => "IO_FAILURE",
            ErrorKind::NoDestinationConfigured => "NO_DESTINATION_CONFIGURED",
            ErrorKind::DoubleFree => "DOUBLE_FREE",
            ErrorKind::UseAfterFree => "USE_AFTER_FREE",
        }
    }

    /// Get the numeric status code.
    pub fn code(&self) -> u8 {
        match self {
            ErrorKind::Success => 0,
            ErrorKind::NotInitialized => 1,
            ErrorKind::AlreadyInitialized => 2,
            ErrorKind::InvalidArgument => 3,
            ErrorKind::InvalidPath => 4,
            ErrorKind::AllocationFailure => 5,
            ErrorKind::IoFailure => 6,
            ErrorKind::NoDestinationConfigured => 7,
            ErrorKind::DoubleFree => 8,
            ErrorKind::UseAfterFree => 9,
        }
    }

    /// Look up a kind by its numeric status code.
    pub fn from_code(code: u8) -> Option<ErrorKind> {
        Self::ALL.iter().find(|kind| kind.code() == code).copied()
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ErrorKind::Success)
    }

    /// Check if this kind reports a record lifecycle bug in the caller.
    pub fn is_lifecycle_violation(&self) -> bool {
        matches!(self, ErrorKind::DoubleFree | ErrorKind::UseAfterFree)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a kind name like `"IO_FAILURE"`.
///
/// Case-insensitive. Derived from [`ErrorKind::ALL`] and [`ErrorKind::as_str()`].
impl std::str::FromStr for ErrorKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|kind| kind.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
