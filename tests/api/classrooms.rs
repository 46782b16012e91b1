use exam_seating::{JsonFileRoomStore, RoomStore, SeatingService};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::support::{add_room, in_memory_service, start_server};

#[tokio::test]
async fn health_check() {
    let base = start_server(in_memory_service()).await;
    let client = reqwest::Client::new();

    add_room(&client, &base, "A", 30, 0).await;

    let resp = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "ok": true, "rooms": 1 }));
}

#[tokio::test]
async fn list_starts_empty() {
    let base = start_server(in_memory_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/api/classrooms"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn add_returns_201_and_lists_record() {
    let base = start_server(in_memory_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/classrooms"))
        .json(&json!({ "roomId": "R101", "capacity": 30, "floorNo": 1, "nearWashroom": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    let record = json!({ "roomId": "R101", "capacity": 30, "floorNo": 1, "nearWashroom": true });
    assert_eq!(body, json!({ "success": true, "classroom": record }));

    let listed: Value = client
        .get(format!("{base}/api/classrooms"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed, json!([record]));
}

#[tokio::test]
async fn duplicate_room_returns_400() {
    let base = start_server(in_memory_service()).await;
    let client = reqwest::Client::new();

    assert_eq!(add_room(&client, &base, "A", 30, 0).await.status(), 201);
    let resp = add_room(&client, &base, "A", 10, 2).await;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Room ID already exists" }));
}

#[tokio::test]
async fn invalid_fields_return_400() {
    let base = start_server(in_memory_service()).await;
    let client = reqwest::Client::new();

    let cases = [
        (json!({ "roomId": "A", "floorNo": 0 }), "Missing required fields"),
        (json!({ "roomId": "A", "capacity": "x", "floorNo": 0 }), "Invalid input types"),
        (json!({ "roomId": "A", "capacity": -1, "floorNo": 0 }), "Capacity must be greater than 0"),
        (json!({ "roomId": "A", "capacity": 5, "floorNo": -1 }), "Floor number cannot be negative"),
    ];
    for (payload, message) in cases {
        let resp = client
            .post(format!("{base}/api/classrooms"))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400, "{payload}");
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], message);
    }

    let listed: Value = client
        .get(format!("{base}/api/classrooms"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn delete_removes_and_is_idempotent() {
    let base = start_server(in_memory_service()).await;
    let client = reqwest::Client::new();

    add_room(&client, &base, "A", 30, 0).await;
    add_room(&client, &base, "B", 20, 1).await;

    for _ in 0..2 {
        let resp = client
            .delete(format!("{base}/api/classrooms/A"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body, json!({ "success": true, "message": "Classroom deleted" }));
    }

    let listed: Value = client
        .get(format!("{base}/api/classrooms"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["roomId"], "B");
}

#[tokio::test]
async fn file_store_persists_across_servers() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("classrooms.json");
    let client = reqwest::Client::new();

    let first = Arc::new(SeatingService::new(JsonFileRoomStore::open(&path).unwrap()));
    let base = start_server(first).await;
    assert_eq!(add_room(&client, &base, "A", 30, 0).await.status(), 201);

    let reopened = JsonFileRoomStore::open(&path).unwrap();
    assert_eq!(reopened.list().unwrap().len(), 1);
    let base = start_server(Arc::new(SeatingService::new(reopened))).await;
    let listed: Value = client
        .get(format!("{base}/api/classrooms"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed[0]["roomId"], "A");
}

#[tokio::test]
async fn malformed_body_returns_400_json_error() {
    let base = start_server(in_memory_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/classrooms"))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());

    let resp = client
        .post(format!("{base}/api/classrooms"))
        .body("roomId=A")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}
