//! Room stores - the classroom collection and its persistence.
//!
//! `RoomStore` is the seam between the service and storage. Two backends
//! ship with the crate:
//!
//! - [`InMemoryRoomStore`]: `Vec`-backed, for tests and ephemeral runs.
//! - [`JsonFileRoomStore`]: a single JSON array file, atomically replaced
//!   on every mutation.
//!
//! ## Example
//!
//! ```ignore
//! use exam_seating::{ClassroomRecord, InMemoryRoomStore, RoomStore};
//!
//! let store = InMemoryRoomStore::new();
//! store.insert(ClassroomRecord::new("R101", 30, 0))?;
//! assert_eq!(store.list()?.len(), 1);
//! store.remove("R101")?;
//! ```

mod in_memory;
mod json_file;

use std::fmt;

use crate::classroom::ClassroomRecord;

/// Storage abstraction over the classroom collection.
pub trait RoomStore: Send + Sync {
    /// All records in storage order.
    fn list(&self) -> Result<Vec<ClassroomRecord>, StoreError>;

    /// Append a record. Fails with `DuplicateId` if the id is taken.
    fn insert(&self, record: ClassroomRecord) -> Result<(), StoreError>;

    /// Remove any record with this id. Absent ids are not an error.
    fn remove(&self, room_id: &str) -> Result<(), StoreError>;
}

/// Error type for room store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A record with this id already exists.
    DuplicateId(String),
    /// The record violates a data model invariant.
    InvalidRecord(String),
    /// The in-memory lock was poisoned.
    LockPoisoned(&'static str),
    /// Reading or writing the backing file failed.
    Io(String),
    /// The backing file is not a valid classroom collection.
    Serde(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::DuplicateId(id) => write!(f, "room id already exists: {}", id),
            StoreError::InvalidRecord(msg) => write!(f, "invalid classroom record: {}", msg),
            StoreError::LockPoisoned(operation) => {
                write!(f, "room store lock poisoned during {}", operation)
            }
            StoreError::Io(msg) => write!(f, "room store i/o error: {}", msg),
            StoreError::Serde(msg) => write!(f, "room store serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl StoreError {
    /// True for failures of the persistence layer rather than of the request.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            StoreError::LockPoisoned(_) | StoreError::Io(_) | StoreError::Serde(_)
        )
    }
}

/// Shared insert precondition: invariants hold and the id is free.
fn check_insert(records: &[ClassroomRecord], record: &ClassroomRecord) -> Result<(), StoreError> {
    record
        .check()
        .map_err(|msg| StoreError::InvalidRecord(msg.to_string()))?;
    if records.iter().any(|r| r.room_id == record.room_id) {
        return Err(StoreError::DuplicateId(record.room_id.clone()));
    }
    Ok(())
}

pub use in_memory::InMemoryRoomStore;
pub use json_file::JsonFileRoomStore;
