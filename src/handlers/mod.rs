/// HTTP handlers for the message endpoints
///
/// All five routes live under `/api/v1/messages`, wrapped by the bearer
/// auth middleware; unauthenticated requests never reach a handler.
pub mod messages;

pub use messages::{
    create_message, delete_message, get_message, list_messages, update_message,
};

use crate::auth::BearerAuth;
use actix_web::web;

/// Register the authenticated message scope. Shared between `main` and the
/// integration tests so both run the exact same routing and guards.
pub fn configure(auth: BearerAuth) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.service(
            web::scope("/api/v1/messages")
                .wrap(auth)
                .route("", web::get().to(messages::list_messages))
                .route("", web::post().to(messages::create_message))
                .route("/{id}", web::get().to(messages::get_message))
                .route("/{id}", web::put().to(messages::update_message))
                .route("/{id}", web::delete().to(messages::delete_message)),
        );
    }
}
