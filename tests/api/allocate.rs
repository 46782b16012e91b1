use serde_json::{json, Value};

use crate::support::{add_room, allocate, in_memory_service, start_server};

#[tokio::test]
async fn allocates_across_floors() {
    let base = start_server(in_memory_service()).await;
    let client = reqwest::Client::new();

    add_room(&client, &base, "B", 20, 1).await;
    add_room(&client, &base, "A", 30, 0).await;

    let resp = allocate(&client, &base, json!({ "totalStudents": 40 })).await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "Successfully allocated 40 students in 2 classroom(s)",
            "allocated": [
                { "roomId": "A", "capacity": 30, "floorNo": 0, "nearWashroom": false, "seatsAllocated": 30 },
                { "roomId": "B", "capacity": 20, "floorNo": 1, "nearWashroom": false, "seatsAllocated": 10 }
            ],
            "totalRoomsUsed": 2
        })
    );
}

#[tokio::test]
async fn shortage_is_a_200_with_success_false() {
    let base = start_server(in_memory_service()).await;
    let client = reqwest::Client::new();

    add_room(&client, &base, "A", 10, 0).await;

    let resp = allocate(&client, &base, json!({ "totalStudents": 15 })).await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "success": false,
            "message": "Not enough seats available",
            "allocated": [],
            "shortage": 5
        })
    );
}

#[tokio::test]
async fn no_rooms_reports_full_shortage() {
    let base = start_server(in_memory_service()).await;
    let client = reqwest::Client::new();

    let body: Value = allocate(&client, &base, json!({ "totalStudents": 5 }))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["allocated"], json!([]));
    assert_eq!(body["shortage"], 5);
}

#[tokio::test]
async fn rejects_bad_student_counts() {
    let base = start_server(in_memory_service()).await;
    let client = reqwest::Client::new();

    let cases = [
        (json!({ "totalStudents": 0 }), "Total students must be greater than 0"),
        (json!({ "totalStudents": -4 }), "Total students must be greater than 0"),
        (json!({}), "Total students must be greater than 0"),
        (json!({ "totalStudents": "many" }), "Invalid total students value"),
    ];
    for (payload, message) in cases {
        let resp = allocate(&client, &base, payload.clone()).await;
        assert_eq!(resp.status(), 400, "{payload}");
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body, json!({ "error": message }));
    }
}

#[tokio::test]
async fn repeated_requests_give_identical_plans() {
    let base = start_server(in_memory_service()).await;
    let client = reqwest::Client::new();

    add_room(&client, &base, "A", 10, 1).await;
    add_room(&client, &base, "B", 10, 0).await;
    add_room(&client, &base, "C", 10, 0).await;

    let first: Value = allocate(&client, &base, json!({ "totalStudents": 10 }))
        .await
        .json()
        .await
        .unwrap();
    let second: Value = allocate(&client, &base, json!({ "totalStudents": 10 }))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(first["allocated"][0]["roomId"], "B");
    assert_eq!(first["totalRoomsUsed"], 1);
}

#[tokio::test]
async fn huge_student_count_reports_shortage() {
    let base = start_server(in_memory_service()).await;
    let client = reqwest::Client::new();

    add_room(&client, &base, "A", 10, 0).await;

    let resp = allocate(&client, &base, json!({ "totalStudents": 5_000_000_000u64 })).await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["shortage"], 4_999_999_990u64);
}

#[tokio::test]
async fn malformed_allocate_body_returns_400_json_error() {
    let base = start_server(in_memory_service()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/allocate"))
        .header("content-type", "application/json")
        .body("[1,")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}
