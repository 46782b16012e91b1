//! Classroom registry and exam seat allocation.
//!
//! - [`classroom`]: the `ClassroomRecord` type and payload validation.
//! - [`store`]: the `RoomStore` trait with in-memory and JSON file backends.
//! - [`allocator`]: greedy, floor-first seat allocation.
//! - [`service`]: `SeatingService` and its HTTP transport.

pub mod allocator;
pub mod classroom;
pub mod service;
pub mod store;

pub use allocator::{allocate, AllocationEntry, AllocationResult};
pub use classroom::{ClassroomRecord, ValidationError};
pub use service::{SeatingService, ServiceError};
pub use store::{InMemoryRoomStore, JsonFileRoomStore, RoomStore, StoreError};
