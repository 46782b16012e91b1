//! Classroom records and the boundary validation that produces them.
//!
//! A `ClassroomRecord` is the only persisted type. Request payloads arrive
//! as loosely-typed JSON and go through [`parse_classroom`] or
//! [`parse_total_students`] before any store or allocator call.

mod input;

use serde::{Deserialize, Serialize};

pub use input::{parse_classroom, parse_total_students, ValidationError};

/// A single classroom that can host exam seating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassroomRecord {
    pub room_id: String,
    pub capacity: u32,
    pub floor_no: u32,
    #[serde(default)]
    pub near_washroom: bool,
}

impl ClassroomRecord {
    pub fn new(room_id: impl Into<String>, capacity: u32, floor_no: u32) -> Self {
        Self {
            room_id: room_id.into(),
            capacity,
            floor_no,
            near_washroom: false,
        }
    }

    pub fn near_washroom(mut self, near: bool) -> Self {
        self.near_washroom = near;
        self
    }

    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    /// Check the data model invariants. Returns the violated rule, if any.
    ///
    /// `floor_no` is unsigned so it cannot go negative.
    pub fn check(&self) -> Result<(), &'static str> {
        if self.room_id.is_empty() {
            return Err("room id must not be empty");
        }
        if self.capacity == 0 {
            return Err("capacity must be greater than 0");
        }
        Ok(())
    }
}
