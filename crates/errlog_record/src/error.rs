//! Record construction and handle errors.

use crate::{ErrorKind, RecordHandle};

/// Errors from building records and from [`RecordStore`](crate::RecordStore) handles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("invalid argument: `{field}` must not be empty")]
    InvalidArgument { field: &'static str },

    #[error("could not allocate storage for an error record")]
    AllocationFailure,

    #[error("record {handle} was already destroyed")]
    DoubleFree { handle: RecordHandle },

    #[error("record {handle} was used after it was destroyed")]
    UseAfterFree { handle: RecordHandle },

    #[error("record {handle} was not issued by this store")]
    UnknownHandle { handle: RecordHandle },
}

/// Maps an error (or a whole operation result) to its [`ErrorKind`].
///
/// This is the status contract for C-style callers: `Ok` is
/// [`ErrorKind::Success`], every error names its failure kind.
pub trait Classify {
    fn kind(&self) -> ErrorKind;
}

impl Classify for RecordError {
    fn kind(&self) -> ErrorKind {
        match self {
            RecordError::InvalidArgument { .. } | RecordError::UnknownHandle { .. } => {
                ErrorKind::InvalidArgument
            }
            RecordError::AllocationFailure => ErrorKind::AllocationFailure,
            RecordError::DoubleFree { .. } => ErrorKind::DoubleFree,
            RecordError::UseAfterFree { .. } => ErrorKind::UseAfterFree,
        }
    }
}

impl<T, E: Classify> Classify for Result<T, E> {
    fn kind(&self) -> ErrorKind {
        match self {
            Ok(_) => ErrorKind::Success,
            Err(err) => err.kind(),
        }
    }
}
