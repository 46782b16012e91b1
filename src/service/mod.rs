//! Seating service - the command layer between transports and the core.
//!
//! `SeatingService<S>` owns a [`RoomStore`](crate::RoomStore) and exposes
//! the four classroom operations, each returning a JSON body or a
//! [`ServiceError`] that knows its HTTP status.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use exam_seating::{service, JsonFileRoomStore, SeatingService};
//!
//! let store = JsonFileRoomStore::open("classrooms.json")?;
//! let service = Arc::new(SeatingService::new(store));
//!
//! // HTTP transport (requires "http" feature)
//! // service::serve(service, "127.0.0.1:5000").await?;
//! ```

mod error;
#[cfg(feature = "http")]
mod http;
mod seating;

pub use error::ServiceError;
#[cfg(feature = "http")]
pub use http::{router, serve};
pub use seating::SeatingService;
