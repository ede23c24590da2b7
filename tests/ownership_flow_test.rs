//! Integration test: end-to-end ownership flow
//!
//! Two clients share the store; one creates a message, the other tries to
//! take it over, the owner edits and finally deletes it. Exercises the
//! whole authorize-then-mutate path through the real routing and guards.
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::{bearer, init_app};
use message_store::db::InMemoryStore;
use std::sync::Arc;

#[actix_web::test]
async fn owner_controls_the_message_lifecycle() {
    let store = Arc::new(InMemoryStore::new());
    store.seed_client("alice");
    store.seed_client("bob");
    let app = init_app(store).await;

    // alice creates "hello"
    let req = test::TestRequest::post()
        .uri("/api/v1/messages")
        .insert_header(bearer("alice"))
        .set_json(serde_json::json!({"content": "hello"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["content"], "hello");
    let id = body["id"].as_str().unwrap().to_string();

    // bob tries to overwrite it and is rejected
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/messages/{id}"))
        .insert_header(bearer("bob"))
        .set_json(serde_json::json!({"content": "hacked"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // the stored content is untouched
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/messages/{id}"))
        .insert_header(bearer("bob"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["content"], "hello");

    // alice edits her own message
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/messages/{id}"))
        .insert_header(bearer("alice"))
        .set_json(serde_json::json!({"content": "hi"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/messages/{id}"))
        .insert_header(bearer("alice"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["content"], "hi");

    // alice deletes it; it is gone for everyone
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/messages/{id}"))
        .insert_header(bearer("alice"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/messages/{id}"))
        .insert_header(bearer("alice"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
