//! Shared helpers for the HTTP integration tests.
//!
//! Builds the real actix app (routing, auth middleware, handlers, guards)
//! over the in-memory repositories, so tests exercise everything except
//! Postgres itself.
use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use message_store::auth::{self, BearerAuth};
use message_store::db::InMemoryStore;
use message_store::handlers;
use message_store::services::{ClientService, MessageService};
use std::sync::Arc;

pub const TEST_SECRET: &str = "integration-test-secret";

/// A valid bearer header for `username`.
pub fn bearer(username: &str) -> (&'static str, String) {
    let token = auth::issue_token(TEST_SECRET, username, 3600).expect("failed to sign test token");
    ("Authorization", format!("Bearer {token}"))
}

/// A bearer header whose token expired in the past.
pub fn expired_bearer(username: &str) -> (&'static str, String) {
    let token = auth::issue_token(TEST_SECRET, username, -120).expect("failed to sign test token");
    ("Authorization", format!("Bearer {token}"))
}

pub async fn init_app(
    store: Arc<InMemoryStore>,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(MessageService::new(store.clone())))
            .app_data(web::Data::new(ClientService::new(store.clone())))
            .configure(handlers::configure(BearerAuth::from_secret(TEST_SECRET))),
    )
    .await
}
