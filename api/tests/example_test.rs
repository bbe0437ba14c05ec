mod helpers;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{DateTime, Utc};
use helpers::{body_json, make_test_app, send};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn create(app: &axum::Router, body: Value) -> Value {
    let (status, json) = send(app, "POST", "/", Some(body)).await;
    assert_eq!(status, StatusCode::OK, "create failed: {json}");
    json
}

#[tokio::test]
async fn create_returns_record_with_generated_fields() {
    let (app, _) = make_test_app().await;
    let before = Utc::now();

    let created = create(&app, json!({ "name": "buy milk" })).await;

    assert!(created["id"].as_i64().unwrap() > 0);
    assert_eq!(created["name"], "buy milk");
    assert_eq!(created["isComplete"], Value::Null);

    let created_at: DateTime<Utc> = created["createdAt"].as_str().unwrap().parse().unwrap();
    assert!(created_at >= before);
}

#[tokio::test]
async fn create_accepts_text_alias_and_ignores_store_fields() {
    let (app, _) = make_test_app().await;

    let created = create(
        &app,
        json!({ "text": "walk dog", "isComplete": true, "id": 999, "createdAt": "2000-01-01T00:00:00Z" }),
    )
    .await;

    assert_eq!(created["name"], "walk dog");
    assert_eq!(created["isComplete"], true);
    assert_ne!(created["id"], 999);
    assert_ne!(created["createdAt"], "2000-01-01T00:00:00Z");
}

#[tokio::test]
async fn create_without_name_is_rejected() {
    let (app, _) = make_test_app().await;

    let (status, json) = send(&app, "POST", "/", Some(json!({ "isComplete": true }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["msg"].as_str().unwrap().contains("name"));

    for blank in ["", "   ", "\t"] {
        let (status, json) = send(&app, "POST", "/", Some(json!({ "name": blank }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["msg"], "Example validation failed: name is required");
    }

    let (_, list) = send(&app, "GET", "/", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn malformed_body_uses_msg_shape() {
    let (app, _) = make_test_app().await;

    let req = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response.into_body()).await;
    assert!(json["msg"].is_string());
    assert_eq!(json.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn fetch_by_id_returns_equal_record() {
    let (app, _) = make_test_app().await;
    let created = create(&app, json!({ "name": "read me", "isComplete": false })).await;

    let (status, fetched) = send(&app, "GET", &format!("/{}", created["id"]), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn unknown_id_returns_null() {
    let (app, _) = make_test_app().await;

    for (method, uri, body) in [
        ("GET", "/424242", None),
        ("DELETE", "/424242", None),
        ("POST", "/isDone/424242", None),
        ("PATCH", "/424242", Some(json!({ "name": "x" }))),
        ("PUT", "/424242", Some(json!({ "name": "x" }))),
    ] {
        let (status, json) = send(&app, method, uri, body).await;
        assert_eq!(status, StatusCode::OK, "{method} {uri}");
        assert_eq!(json, Value::Null, "{method} {uri}");
    }
}

#[tokio::test]
async fn malformed_id_is_bad_request() {
    let (app, _) = make_test_app().await;

    let (status, json) = send(&app, "GET", "/not-an-id", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["msg"].is_string());

    let (status, _) = send(&app, "POST", "/isDone/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn example_scenario_create_get_delete_get() {
    let (app, _) = make_test_app().await;

    let created = create(&app, json!({ "name": "buy milk" })).await;
    let uri = format!("/{}", created["id"]);

    let (_, fetched) = send(&app, "GET", &uri, None).await;
    assert_eq!(fetched, created);

    let (status, deleted) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, created);

    let (status, gone) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(gone, Value::Null);
}

#[tokio::test]
async fn toggle_returns_post_update_value() {
    let (app, _) = make_test_app().await;
    let created = create(&app, json!({ "name": "toggle me" })).await;
    let uri = format!("/isDone/{}", created["id"]);

    let (status, first) = send(&app, "POST", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["isComplete"], true);

    let (_, second) = send(&app, "POST", &uri, None).await;
    assert_eq!(second["isComplete"], false);
    assert_eq!(second["name"], "toggle me");
    assert_eq!(second["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn patch_changes_name_only() {
    let (app, _) = make_test_app().await;
    let created = create(&app, json!({ "name": "draft", "isComplete": true })).await;
    let uri = format!("/{}", created["id"]);

    let (status, patched) = send(&app, "PATCH", &uri, Some(json!({ "text": "final" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["name"], "final");
    assert_eq!(patched["isComplete"], true);
    assert_eq!(patched["id"], created["id"]);

    let (_, fetched) = send(&app, "GET", &uri, None).await;
    assert_eq!(fetched, patched);
}

#[tokio::test]
async fn update_with_blank_name_is_rejected() {
    let (app, _) = make_test_app().await;
    let created = create(&app, json!({ "name": "keep" })).await;
    let uri = format!("/{}", created["id"]);

    for blank in ["", "  "] {
        let (status, json) = send(&app, "PATCH", &uri, Some(json!({ "name": blank }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["msg"], "Example validation failed: name is required");

        let (status, json) = send(&app, "PUT", &uri, Some(json!({ "name": blank }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["msg"], "Example validation failed: name is required");
    }

    let (_, fetched) = send(&app, "GET", &uri, None).await;
    assert_eq!(fetched["name"], "keep");
}

#[tokio::test]
async fn replace_updates_fields_and_preserves_identity() {
    let (app, _) = make_test_app().await;
    let created = create(&app, json!({ "name": "old", "isComplete": true })).await;
    let uri = format!("/{}", created["id"]);

    let (status, replaced) = send(&app, "PUT", &uri, Some(json!({ "name": "new" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(replaced["id"], created["id"]);
    assert_eq!(replaced["createdAt"], created["createdAt"]);
    assert_eq!(replaced["name"], "new");
    assert_eq!(replaced["isComplete"], Value::Null);

    let (_, replaced) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({ "name": "newer", "isComplete": false })),
    )
    .await;
    assert_eq!(replaced["name"], "newer");
    assert_eq!(replaced["isComplete"], false);
}

#[tokio::test]
async fn list_returns_every_live_record() {
    let (app, _) = make_test_app().await;

    let a = create(&app, json!({ "name": "a" })).await;
    let b = create(&app, json!({ "name": "b" })).await;
    let c = create(&app, json!({ "name": "c" })).await;
    send(&app, "DELETE", &format!("/{}", b["id"]), None).await;

    let (status, list) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([a, c]));
}

#[tokio::test]
async fn list_filters_are_applied() {
    let (app, _) = make_test_app().await;

    let done = create(&app, json!({ "name": "done", "isComplete": true })).await;
    let open = create(&app, json!({ "name": "open", "isComplete": false })).await;
    let unset = create(&app, json!({ "name": "unset" })).await;

    let (status, list) = send(&app, "GET", "/?isComplete=true", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([done]));

    let (_, list) = send(&app, "GET", "/?name=unset", None).await;
    assert_eq!(list, json!([unset]));

    let (_, list) = send(&app, "GET", "/?sort=-createdAt", None).await;
    assert_eq!(list, json!([unset, open, done]));
}

#[tokio::test]
async fn list_rejects_unknown_filter() {
    let (app, _) = make_test_app().await;
    create(&app, json!({ "name": "a" })).await;

    let (status, json) = send(&app, "GET", "/?colour=red", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["msg"], "Unknown filter `colour`");

    let (status, _) = send(&app, "GET", "/?isComplete=maybe", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn routes_are_also_served_under_examples_prefix() {
    let (app, _) = make_test_app().await;

    let (status, created) = send(&app, "POST", "/examples", Some(json!({ "name": "prefixed" }))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, fetched) = send(&app, "GET", &format!("/examples/{}", created["id"]), None).await;
    assert_eq!(fetched, created);

    let (_, toggled) = send(&app, "POST", &format!("/examples/isDone/{}", created["id"]), None).await;
    assert_eq!(toggled["isComplete"], true);

    let (_, list) = send(&app, "GET", "/", None).await;
    assert_eq!(list, json!([toggled]));
}

#[tokio::test]
async fn create_is_also_served_at_examples_new() {
    let (app, _) = make_test_app().await;

    let (status, created) =
        send(&app, "POST", "/examples/new", Some(json!({ "text": "via new" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "via new");

    let (_, fetched) = send(&app, "GET", &format!("/{}", created["id"]), None).await;
    assert_eq!(fetched, created);

    let (status, json) = send(&app, "POST", "/examples/new", Some(json!({ "name": " " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["msg"], "Example validation failed: name is required");
}

#[tokio::test]
async fn store_failures_are_bad_request() {
    use sea_orm::DatabaseConnection;
    use util::state::AppState;

    let app = api::routes::app(AppState::new(DatabaseConnection::Disconnected));

    let (status, json) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["msg"].is_string());

    let (status, _) = send(&app, "POST", "/", Some(json!({ "name": "x" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let (app, _) = make_test_app().await;

    let req = Request::builder()
        .method("GET")
        .uri("/")
        .header("origin", "https://somewhere.example")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}
