//! HTTP transport for the seating service.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /api/classrooms` - list all classrooms.
//! - `POST /api/classrooms` - add a classroom (`201` on success).
//! - `DELETE /api/classrooms/:room_id` - remove a classroom.
//! - `POST /api/allocate` - compute a seating plan for `{ "totalStudents": n }`.
//! - `GET /health` - `{ "ok": true, "rooms": n }`.
//!
//! Errors are returned as `{ "error": "<message>" }` with the status from
//! [`ServiceError::status_code`]. Bodies that are not JSON get a `400` in
//! the same shape.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::info;

use super::error::ServiceError;
use super::seating::SeatingService;
use crate::store::RoomStore;

type Shared<S> = State<Arc<SeatingService<S>>>;

/// Build an axum `Router` serving the given service.
pub fn router<S: RoomStore + 'static>(service: Arc<SeatingService<S>>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/classrooms",
            get(list_handler).post(add_handler),
        )
        .route("/api/classrooms/:room_id", delete(delete_handler))
        .route("/api/allocate", post(allocate_handler))
        .with_state(service)
}

/// Serve the service over HTTP at the given address (e.g. `"127.0.0.1:5000"`).
pub async fn serve<S: RoomStore + 'static>(
    service: Arc<SeatingService<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "exam seating service listening");
    axum::serve(listener, app).await
}

async fn health_handler<S: RoomStore + 'static>(State(service): Shared<S>) -> Response {
    respond(
        StatusCode::OK,
        service
            .room_count()
            .map(|rooms| json!({ "ok": true, "rooms": rooms })),
    )
}

async fn list_handler<S: RoomStore + 'static>(State(service): Shared<S>) -> Response {
    respond(StatusCode::OK, service.list_rooms())
}

async fn add_handler<S: RoomStore + 'static>(
    State(service): Shared<S>,
    input: Result<Json<Value>, JsonRejection>,
) -> Response {
    let result = json_body(input).and_then(|input| service.add_room(&input));
    respond(StatusCode::CREATED, result)
}

async fn allocate_handler<S: RoomStore + 'static>(
    State(service): Shared<S>,
    input: Result<Json<Value>, JsonRejection>,
) -> Response {
    let result = json_body(input).and_then(|input| service.allocate(&input));
    respond(StatusCode::OK, result)
}

async fn delete_handler<S: RoomStore + 'static>(
    State(service): Shared<S>,
    Path(room_id): Path<String>,
) -> Response {
    respond(StatusCode::OK, service.delete_room(&room_id))
}

fn json_body(input: Result<Json<Value>, JsonRejection>) -> Result<Value, ServiceError> {
    input
        .map(|Json(value)| value)
        .map_err(|rejection| ServiceError::MalformedBody(rejection.body_text()))
}

fn respond(success: StatusCode, result: Result<Value, ServiceError>) -> Response {
    match result {
        Ok(value) => (success, Json(value)).into_response(),
        Err(e) => {
            let status =
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}
