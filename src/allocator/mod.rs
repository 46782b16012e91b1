//! Greedy exam seat allocation.
//!
//! Rooms are filled lowest floor first, and smaller rooms first within a
//! floor. A plan is all-or-nothing: if the rooms cannot seat everyone the
//! result carries the shortage and no entries.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classroom::ClassroomRecord;

pub const SHORTAGE_MESSAGE: &str = "Not enough seats available";

/// One line of a seating plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEntry {
    pub room_id: String,
    pub capacity: u32,
    pub floor_no: u32,
    pub near_washroom: bool,
    pub seats_allocated: u32,
}

impl AllocationEntry {
    fn new(room: &ClassroomRecord, seats: u32) -> Self {
        Self {
            room_id: room.room_id.clone(),
            capacity: room.capacity,
            floor_no: room.floor_no,
            near_washroom: room.near_washroom,
            seats_allocated: seats,
        }
    }
}

/// Outcome of [`allocate`]. Callers branch on `success`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResult {
    pub success: bool,
    pub message: String,
    pub allocated: Vec<AllocationEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortage: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_rooms_used: Option<usize>,
}

impl AllocationResult {
    fn infeasible(remaining: u64) -> Self {
        Self {
            success: false,
            message: SHORTAGE_MESSAGE.to_string(),
            allocated: Vec::new(),
            shortage: Some(remaining),
            total_rooms_used: None,
        }
    }

    fn seated(total_students: u64, allocated: Vec<AllocationEntry>) -> Self {
        let rooms_used = allocated.len();
        Self {
            success: true,
            message: format!(
                "Successfully allocated {} students in {} classroom(s)",
                total_students, rooms_used
            ),
            allocated,
            shortage: None,
            total_rooms_used: Some(rooms_used),
        }
    }

    pub fn seats_allocated(&self) -> u64 {
        self.allocated
            .iter()
            .map(|e| u64::from(e.seats_allocated))
            .sum()
    }
}

/// Seat `total_students` across `rooms`.
///
/// Ties on `(floor_no, capacity)` keep their input order.
pub fn allocate(total_students: u64, rooms: &[ClassroomRecord]) -> AllocationResult {
    if rooms.is_empty() {
        debug!(total_students, "no classrooms to allocate into");
        return AllocationResult::infeasible(total_students);
    }

    let mut ordered: Vec<&ClassroomRecord> = rooms.iter().collect();
    ordered.sort_by_key(|r| (r.floor_no, r.capacity));

    let mut allocated = Vec::new();
    let mut remaining = total_students;
    for room in ordered {
        if remaining == 0 {
            break;
        }
        let seats = u64::from(room.capacity).min(remaining);
        remaining -= seats;
        // seats never exceeds a u32 capacity
        allocated.push(AllocationEntry::new(room, seats as u32));
    }

    if remaining > 0 {
        debug!(total_students, shortage = remaining, "allocation infeasible");
        return AllocationResult::infeasible(remaining);
    }

    debug!(total_students, rooms_used = allocated.len(), "allocation planned");
    AllocationResult::seated(total_students, allocated)
}
