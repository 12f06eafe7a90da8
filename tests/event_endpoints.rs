//! Event CRUD behaviour over the full application.

mod support;

use actix_web::http::StatusCode;
use serde_json::json;

use support::{
    body_json, delete_auth, get, patch_json_auth, post_json_auth, token_for, TestContext,
};

fn london_2012() -> serde_json::Value {
    json!({
        "type": "Summer",
        "year": 2012,
        "country": "UK",
        "host": "London",
        "start": "29 Aug 2012",
        "end": "9 Sep 2012",
        "participants": 4302,
        "highlights": "First Games with athletes from every delegation"
    })
}

#[actix_web::test]
async fn empty_store_lists_no_events() {
    let ctx = TestContext::new();
    let app = ctx.app().await;

    let resp = get(&app, "/events").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));
}

#[actix_web::test]
async fn added_event_gets_a_store_assigned_id() {
    let ctx = TestContext::new();
    let app = ctx.app().await;
    let token = token_for(&app, "editor@example.com", "hunter2!").await;

    let resp = post_json_auth(&app, "/events", &token, london_2012()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Event added with id= 1");

    let resp = get(&app, "/events/1").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["type"], "Summer");
    assert_eq!(body["host"], "London");
    assert_eq!(body["participants"], 4302);
}

#[actix_web::test]
async fn optional_fields_may_be_omitted() {
    let ctx = TestContext::new();
    let app = ctx.app().await;
    let token = token_for(&app, "editor@example.com", "hunter2!").await;

    let resp = post_json_auth(
        &app,
        "/events",
        &token,
        json!({"type": "Winter", "year": 1976, "country": "Sweden", "host": "Örnsköldsvik"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get(&app, "/events/1").await;
    let body = body_json(resp).await;
    assert_eq!(body["type"], "Winter");
    assert_eq!(body["participants"], json!(null));
}

#[actix_web::test]
async fn blank_required_field_is_bad_request() {
    let ctx = TestContext::new();
    let app = ctx.app().await;
    let token = token_for(&app, "editor@example.com", "hunter2!").await;

    let resp = post_json_auth(
        &app,
        "/events",
        &token,
        json!({"type": "  ", "year": 2012, "country": "UK", "host": "London"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn missing_event_is_not_found() {
    let ctx = TestContext::new();
    let app = ctx.app().await;

    let resp = get(&app, "/events/99").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Event 99 not found.");
}

#[actix_web::test]
async fn non_numeric_event_id_is_bad_request() {
    let ctx = TestContext::new();
    let app = ctx.app().await;

    let resp = get(&app, "/events/not-a-number").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn patch_updates_only_supplied_fields() {
    let ctx = TestContext::new();
    let app = ctx.app().await;
    let token = token_for(&app, "editor@example.com", "hunter2!").await;

    let resp = post_json_auth(&app, "/events", &token, london_2012()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = patch_json_auth(
        &app,
        "/events/1",
        &token,
        json!({"participants": 4350, "highlights": "Record attendance"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Event with id=1 updated.");

    let resp = get(&app, "/events/1").await;
    let body = body_json(resp).await;
    assert_eq!(body["participants"], 4350);
    assert_eq!(body["highlights"], "Record attendance");
    assert_eq!(body["host"], "London");
}

#[actix_web::test]
async fn patch_of_missing_event_is_not_found() {
    let ctx = TestContext::new();
    let app = ctx.app().await;
    let token = token_for(&app, "editor@example.com", "hunter2!").await;

    let resp = patch_json_auth(&app, "/events/42", &token, json!({"year": 2024})).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Event 42 not found.");
}

#[actix_web::test]
async fn patch_blanking_required_field_is_bad_request() {
    let ctx = TestContext::new();
    let app = ctx.app().await;
    let token = token_for(&app, "editor@example.com", "hunter2!").await;

    let resp = post_json_auth(&app, "/events", &token, london_2012()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = patch_json_auth(&app, "/events/1", &token, json!({"host": "  "})).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn deleted_event_is_gone() {
    let ctx = TestContext::new();
    let app = ctx.app().await;
    let token = token_for(&app, "editor@example.com", "hunter2!").await;

    let resp = post_json_auth(&app, "/events", &token, london_2012()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = delete_auth(&app, "/events/1", &token).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Event 1 deleted.");

    let resp = get(&app, "/events/1").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn mutations_require_a_token() {
    let ctx = TestContext::new();
    let app = ctx.app().await;

    let req = actix_web::test::TestRequest::post()
        .uri("/events")
        .set_json(london_2012())
        .to_request();
    let resp = actix_web::test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = actix_web::test::TestRequest::delete()
        .uri("/events/1")
        .to_request();
    let resp = actix_web::test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
