use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode},
};
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use steeple::db::entities::{
    attendance, communication, connection_request, group, group_historical, person, registration,
};
use steeple::test_helpers::{attendance_referencing_group, empty, group_row, test_router};

async fn send(router: Router, request: Request<Body>) -> axum::response::Response {
    router.oneshot(request).await.expect("request should route")
}

async fn json_response(router: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = send(router, request).await;
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let value = serde_json::from_slice(&bytes).expect("body should be JSON");
    (status, value)
}

async fn html_response(router: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = send(router, request).await;
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    (status, String::from_utf8(bytes.to_vec()).expect("body should be UTF-8"))
}

/// Queues one empty probe result per reference the group guard walks, in its
/// declared order.
fn no_group_references(mock: MockDatabase) -> MockDatabase {
    mock.append_query_results([empty::<attendance::Model>()])
        .append_query_results([empty::<communication::Model>()])
        .append_query_results([empty::<connection_request::Model>()])
        .append_query_results([empty::<group::Model>()])
        .append_query_results([empty::<group_historical::Model>()])
        .append_query_results([empty::<group_historical::Model>()])
        .append_query_results([empty::<person::Model>()])
        .append_query_results([empty::<person::Model>()])
        .append_query_results([empty::<registration::Model>()])
}

#[tokio::test]
async fn health_reports_ok() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let (status, body) = json_response(
        test_router(db),
        Request::builder()
            .uri("/health")
            .body(Body::empty())
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn list_groups_returns_rows() {
    let id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![group_row(id, "Alpha")]])
        .into_connection();

    let (status, body) = json_response(
        test_router(db),
        Request::builder()
            .uri("/groups")
            .body(Body::empty())
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("body should be an array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Alpha");
    assert_eq!(rows[0]["id"], id.to_string().as_str());
}

#[tokio::test]
async fn create_group_returns_created() {
    let id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![group_row(id, "Alpha")]])
        .into_connection();

    let (status, body) = json_response(
        test_router(db),
        Request::builder()
            .method("POST")
            .uri("/groups")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "name": "Alpha" }).to_string()))
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Alpha");
}

#[tokio::test]
async fn create_group_rejects_blank_name() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let (status, body) = json_response(
        test_router(db),
        Request::builder()
            .method("POST")
            .uri("/groups")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "name": "   " }).to_string()))
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Group name is required");
}

#[tokio::test]
async fn can_delete_reports_blocking_reason() {
    let group_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![attendance_referencing_group(group_id)]])
        .into_connection();

    let (status, body) = json_response(
        test_router(db),
        Request::builder()
            .uri(format!("/groups/{group_id}/can-delete"))
            .body(Body::empty())
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "allowed": false,
            "reason": "This Group is assigned to a Attendance."
        })
    );
}

#[tokio::test]
async fn can_delete_allows_unreferenced_group() {
    let group_id = Uuid::new_v4();
    let db = no_group_references(MockDatabase::new(DatabaseBackend::Postgres)).into_connection();

    let (status, body) = json_response(
        test_router(db),
        Request::builder()
            .uri(format!("/groups/{group_id}/can-delete"))
            .body(Body::empty())
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "allowed": true }));
}

#[tokio::test]
async fn delete_blocked_group_returns_conflict() {
    let group_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![attendance_referencing_group(group_id)]])
        .into_connection();

    let (status, body) = json_response(
        test_router(db),
        Request::builder()
            .method("DELETE")
            .uri(format!("/groups/{group_id}"))
            .body(Body::empty())
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "This Group is assigned to a Attendance.");
}

#[tokio::test]
async fn delete_unreferenced_group_returns_no_content() {
    let group_id = Uuid::new_v4();
    let db = no_group_references(MockDatabase::new(DatabaseBackend::Postgres))
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let response = send(
        test_router(db),
        Request::builder()
            .method("DELETE")
            .uri(format!("/groups/{group_id}"))
            .body(Body::empty())
            .expect("request should build"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn delete_with_failing_store_returns_service_unavailable() {
    let group_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Query(RuntimeErr::Internal(
            "connection reset".to_string(),
        ))])
        .into_connection();

    let (status, body) = json_response(
        test_router(db),
        Request::builder()
            .method("DELETE")
            .uri(format!("/groups/{group_id}"))
            .body(Body::empty())
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body["error"],
        "Unable to determine whether this Group can be deleted."
    );
}

#[tokio::test]
async fn group_picker_page_renders_control() {
    let id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![group_row(id, "Alpha")]])
        .into_connection();

    let (status, html) = html_response(
        test_router(db),
        Request::builder()
            .uri("/forms/group-picker")
            .body(Body::empty())
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("form-control"));
    assert!(html.contains("Alpha"));
    assert!(html.contains("name=\"item_state\""));
    assert!(html.contains("data-active=\"true\""));
}

#[tokio::test]
async fn group_picker_submit_echoes_selection() {
    let id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![group_row(id, "Alpha")]])
        .into_connection();

    // Snapshot matching the rendered list: blank item plus one group.
    let form = format!(
        "group-picker={id}&item_state=%5B%7B%7D%2C%7B%22data-active%22%3A%22true%22%7D%5D"
    );
    let (status, html) = html_response(
        test_router(db),
        Request::builder()
            .method("POST")
            .uri("/forms/group-picker")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(form))
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("You picked Alpha."));
}

#[tokio::test]
async fn group_picker_submit_without_selection_shows_validator_message() {
    let id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![group_row(id, "Alpha")]])
        .into_connection();

    let form = "group-picker=&item_state=%5B%7B%7D%2C%7B%7D%5D";
    let (status, html) = html_response(
        test_router(db),
        Request::builder()
            .method("POST")
            .uri("/forms/group-picker")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(form))
            .expect("request should build"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!html.contains("You picked"));
    assert!(html.contains("Group is required."));
    assert!(!html.contains("display:none"));
}
