//! SeatingService - validation, store access and allocation behind one type.
//!
//! Each method takes the raw request input, runs boundary validation,
//! calls into the store and allocator, and returns the JSON body the
//! transport should send.
//!
//! ## Example
//!
//! ```ignore
//! use exam_seating::{InMemoryRoomStore, SeatingService};
//! use serde_json::json;
//!
//! let service = SeatingService::new(InMemoryRoomStore::new());
//! service.add_room(&json!({ "roomId": "A", "capacity": 30, "floorNo": 0 }))?;
//! let plan = service.allocate(&json!({ "totalStudents": 25 }))?;
//! assert_eq!(plan["success"], true);
//! ```

use serde_json::{json, Value};
use tracing::warn;

use super::error::ServiceError;
use crate::allocator::{self, AllocationResult};
use crate::classroom::{parse_classroom, parse_total_students, ClassroomRecord};
use crate::store::RoomStore;

/// The exam seating service, generic over its room store.
pub struct SeatingService<S> {
    store: S,
}

impl<S: RoomStore> SeatingService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// All classrooms as a JSON array.
    pub fn list_rooms(&self) -> Result<Value, ServiceError> {
        Ok(json!(self.store.list()?))
    }

    /// Validate and store a new classroom.
    ///
    /// Returns `{ "success": true, "classroom": {...} }`.
    pub fn add_room(&self, input: &Value) -> Result<Value, ServiceError> {
        let record = parse_classroom(input).inspect_err(|e| {
            warn!(error = %e, "classroom rejected");
        })?;
        self.store.insert(record.clone()).inspect_err(|e| {
            warn!(room_id = %record.room_id, error = %e, "classroom not stored");
        })?;
        Ok(json!({ "success": true, "classroom": record }))
    }

    /// Seat the requested number of students across all stored rooms.
    pub fn allocate(&self, input: &Value) -> Result<Value, ServiceError> {
        Ok(json!(self.plan(input)?))
    }

    /// Typed form of [`allocate`](Self::allocate).
    pub fn plan(&self, input: &Value) -> Result<AllocationResult, ServiceError> {
        let total_students = parse_total_students(input).inspect_err(|e| {
            warn!(error = %e, "allocation request rejected");
        })?;
        let rooms: Vec<ClassroomRecord> = self.store.list()?;
        Ok(allocator::allocate(total_students, &rooms))
    }

    /// Remove a classroom. Succeeds whether or not the id existed.
    pub fn delete_room(&self, room_id: &str) -> Result<Value, ServiceError> {
        self.store.remove(room_id)?;
        Ok(json!({ "success": true, "message": "Classroom deleted" }))
    }

    /// Number of stored classrooms.
    pub fn room_count(&self) -> Result<usize, ServiceError> {
        Ok(self.store.list()?.len())
    }
}
