//! Handle-based record storage.
//!
//! A [`RecordStore`] owns records and hands out [`RecordHandle`]s. Every
//! handle carries the generation of the slot it was issued for:
//! - Destroying a record empties its slot but keeps the generation, so a
//!   second destroy through the same handle is reported as `DoubleFree`.
//! - Reusing a slot bumps its generation, so a stale handle can never reach
//!   the record that took its place.
//! - A slot whose generation reaches `u32::MAX` is retired instead of
//!   reused, so generations never wrap back onto an old handle.

use std::fmt;

use crate::{ErrorKind, ErrorRecord, RecordError};

/// Opaque reference to a record inside a [`RecordStore`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct RecordHandle {
    index: u32,
    generation: u32,
}

impl fmt::Display for RecordHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

struct Slot {
    generation: u32,
    record: Option<ErrorRecord>,
}

/// Owner of records addressed by [`RecordHandle`].
pub struct RecordStore {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl RecordStore {
    /// Create an empty store.
    pub const fn new() -> Self {
        RecordStore {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Validate the parts and store the resulting record.
    pub fn create(
        &mut self,
        code: ErrorKind,
        line: u32,
        function: &str,
        file: &str,
        message: &str,
    ) -> Result<RecordHandle, RecordError> {
        let record = ErrorRecord::new(code, line, function, file, message)?;
        self.insert(record)
    }

    /// Take ownership of `record` and return its handle.
    pub fn insert(&mut self, record: ErrorRecord) -> Result<RecordHandle, RecordError> {
        // The free list can hold every slot, so `destroy` never allocates.
        self.free
            .try_reserve(self.slots.len() + 1 - self.free.len())
            .map_err(|_| RecordError::AllocationFailure)?;

        let handle = if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.generation += 1;
            slot.record = Some(record);
            RecordHandle {
                index,
                generation: slot.generation,
            }
        } else {
            let index =
                u32::try_from(self.slots.len()).map_err(|_| RecordError::AllocationFailure)?;
            self.slots
                .try_reserve(1)
                .map_err(|_| RecordError::AllocationFailure)?;
            self.slots.push(Slot {
                generation: 0,
                record: Some(record),
            });
            RecordHandle {
                index,
                generation: 0,
            }
        };

        self.live += 1;
        tracing::trace!(%handle, live = self.live, "record stored");
        Ok(handle)
    }

    /// Borrow the record behind `handle`.
    pub fn get(&self, handle: RecordHandle) -> Result<&ErrorRecord, RecordError> {
        let slot = self.slot(handle)?;
        match slot.record.as_ref() {
            Some(record) if slot.generation == handle.generation => Ok(record),
            _ => {
                tracing::warn!(%handle, "record used after destroy");
                Err(RecordError::UseAfterFree { handle })
            }
        }
    }

    /// Remove the record behind `handle` and hand it back to the caller.
    pub fn destroy(&mut self, handle: RecordHandle) -> Result<ErrorRecord, RecordError> {
        let slot = self.slot_mut(handle)?;
        let taken = if slot.generation == handle.generation {
            slot.record.take()
        } else {
            None
        };
        let Some(record) = taken else {
            tracing::warn!(%handle, "record destroyed twice");
            return Err(RecordError::DoubleFree { handle });
        };

        if handle.generation == u32::MAX {
            tracing::debug!(%handle, "slot retired");
        } else {
            self.free.push(handle.index);
        }
        self.live -= 1;
        tracing::trace!(%handle, live = self.live, "record destroyed");
        Ok(record)
    }

    /// Number of records currently stored.
    pub fn live_count(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    fn slot(&self, handle: RecordHandle) -> Result<&Slot, RecordError> {
        self.slots
            .get(handle.index as usize)
            .ok_or(RecordError::UnknownHandle { handle })
    }

    fn slot_mut(&mut self, handle: RecordHandle) -> Result<&mut Slot, RecordError> {
        self.slots
            .get_mut(handle.index as usize)
            .ok_or(RecordError::UnknownHandle { handle })
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
