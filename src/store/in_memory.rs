//! InMemoryRoomStore - Vec-backed room store for testing and development.

use std::sync::{Arc, RwLock};

use tracing::info;

use super::{check_insert, RoomStore, StoreError};
use crate::classroom::ClassroomRecord;

/// In-memory room store. Clone-friendly via Arc; clones share storage.
#[derive(Clone, Default)]
pub struct InMemoryRoomStore {
    rooms: Arc<RwLock<Vec<ClassroomRecord>>>,
}

impl InMemoryRoomStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with records. Invariants are checked per record.
    pub fn with_rooms(
        rooms: impl IntoIterator<Item = ClassroomRecord>,
    ) -> Result<Self, StoreError> {
        let store = Self::new();
        for room in rooms {
            store.insert(room)?;
        }
        Ok(store)
    }
}

impl RoomStore for InMemoryRoomStore {
    fn list(&self) -> Result<Vec<ClassroomRecord>, StoreError> {
        let rooms = self
            .rooms
            .read()
            .map_err(|_| StoreError::LockPoisoned("list"))?;
        Ok(rooms.clone())
    }

    fn insert(&self, record: ClassroomRecord) -> Result<(), StoreError> {
        let mut rooms = self
            .rooms
            .write()
            .map_err(|_| StoreError::LockPoisoned("insert"))?;
        check_insert(&rooms, &record)?;
        info!(room_id = %record.room_id, "classroom added");
        rooms.push(record);
        Ok(())
    }

    fn remove(&self, room_id: &str) -> Result<(), StoreError> {
        let mut rooms = self
            .rooms
            .write()
            .map_err(|_| StoreError::LockPoisoned("remove"))?;
        rooms.retain(|r| r.room_id != room_id);
        info!(room_id, "classroom removed");
        Ok(())
    }
}
