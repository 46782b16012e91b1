//! JsonFileRoomStore - room store persisted as one JSON array file.
//!
//! The file holds the full collection, pretty-printed. Each mutation writes
//! the next snapshot to a sibling `.tmp` file and renames it over the target.
//! The cached collection is only replaced once the rename succeeds.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{debug, info, warn};

use super::{check_insert, RoomStore, StoreError};
use crate::classroom::ClassroomRecord;

pub struct JsonFileRoomStore {
    path: PathBuf,
    rooms: RwLock<Vec<ClassroomRecord>>,
}

impl JsonFileRoomStore {
    /// Open the store at `path`. A missing file is an empty collection.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let rooms = load(&path)?;
        debug!(path = %path.display(), rooms = rooms.len(), "room store loaded");
        Ok(Self {
            path,
            rooms: RwLock::new(rooms),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, rooms: &[ClassroomRecord]) -> Result<(), StoreError> {
        save(&self.path, rooms).inspect_err(|e| {
            warn!(path = %self.path.display(), error = %e, "failed to persist classrooms");
        })
    }
}

impl RoomStore for JsonFileRoomStore {
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

        let room_id = record.room_id.clone();
        let mut next = rooms.clone();
        next.push(record);
        self.persist(&next)?;
        *rooms = next;

        info!(room_id = %room_id, "classroom added");
        Ok(())
    }

    fn remove(&self, room_id: &str) -> Result<(), StoreError> {
        let mut rooms = self
            .rooms
            .write()
            .map_err(|_| StoreError::LockPoisoned("remove"))?;

        let next: Vec<ClassroomRecord> = rooms
            .iter()
            .filter(|r| r.room_id != room_id)
            .cloned()
            .collect();
        self.persist(&next)?;
        *rooms = next;

        info!(room_id, "classroom removed");
        Ok(())
    }
}

fn load(path: &Path) -> Result<Vec<ClassroomRecord>, StoreError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StoreError::Io(format!("{}: {}", path.display(), e))),
    };
    let records: Vec<ClassroomRecord> = serde_json::from_slice(&bytes)
        .map_err(|e| StoreError::Serde(format!("{}: {}", path.display(), e)))?;

    let mut accepted = Vec::with_capacity(records.len());
    for record in records {
        check_insert(&accepted, &record)?;
        accepted.push(record);
    }
    Ok(accepted)
}

fn save(path: &Path, rooms: &[ClassroomRecord]) -> Result<(), StoreError> {
    let io_err = |e: std::io::Error| StoreError::Io(format!("{}: {}", path.display(), e));

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let bytes = serde_json::to_vec_pretty(rooms).map_err(|e| StoreError::Serde(e.to_string()))?;

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, bytes).map_err(io_err)?;
    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        io_err(e)
    })
}
