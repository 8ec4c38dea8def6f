//! Log destinations.
//!
//! Uses enum dispatch like the rest of the context state: a destination is
//! either unset, an append-mode file, or an in-memory buffer.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::ContextError;

/// An open log file.
#[derive(Debug)]
pub(crate) struct FileDestination {
    path: PathBuf,
    file: File,
}

impl FileDestination {
    /// Open `path` for appending, creating it if needed.
    pub(crate) fn open(path: &Path) -> Result<Self, ContextError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|err| ContextError::io(path, err))?;
        Ok(FileDestination {
            path: path.to_path_buf(),
            file,
        })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Append one rendered line with a single write.
    ///
    /// A failed `sync_data` is reported as [`ContextError::Sync`]: the line
    /// is already in the file at that point.
    fn append(&mut self, line: &str, sync: bool) -> Result<(), ContextError> {
        self.file
            .write_all(line.as_bytes())
            .and_then(|()| self.file.flush())
            .map_err(|err| ContextError::io(&self.path, err))?;
        if sync {
            self.file
                .sync_data()
                .map_err(|source| ContextError::Sync {
                    path: self.path.clone(),
                    source,
                })?;
        }
        Ok(())
    }
}

/// Where rendered records go.
#[derive(Debug, Default)]
pub(crate) enum Destination {
    #[default]
    Unset,
    File(FileDestination),
    Buffer(String),
}

impl Destination {
    /// Append one rendered line.
    ///
    /// Fails with `NoDestinationConfigured` when unset.
    pub(crate) fn append(&mut self, line: &str, sync: bool) -> Result<(), ContextError> {
        match self {
            Destination::Unset => Err(ContextError::NoDestinationConfigured),
            Destination::File(file) => file.append(line, sync),
            Destination::Buffer(buf) => {
                buf.push_str(line);
                Ok(())
            }
        }
    }

    pub(crate) fn path(&self) -> Option<&Path> {
        match self {
            Destination::File(file) => Some(file.path()),
            Destination::Unset | Destination::Buffer(_) => None,
        }
    }

    pub(crate) fn buffered(&self) -> &str {
        match self {
            Destination::Buffer(buf) => buf,
            Destination::Unset | Destination::File(_) => "",
        }
    }

    pub(crate) fn is_set(&self) -> bool {
        !matches!(self, Destination::Unset)
    }
}
