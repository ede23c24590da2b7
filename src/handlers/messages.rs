/// Message handlers - HTTP endpoints for message CRUD
///
/// Response shapes mirror the read model deliberately: list and get-by-id
/// return content-only bodies, while create also returns the generated id
/// (plus a Location header). Update and delete start with an explicit
/// ownership guard clause before touching the store.
use crate::auth::{ownership, Principal};
use crate::error::Result;
use crate::models::Message;
use crate::services::{ClientService, MessageService, Page};
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Create/update request body. The owner is never accepted as input;
/// unknown fields are ignored, so an owner-like field in the body has no
/// effect.
#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    pub content: String,
}

/// Content-only read model used for list, get-by-id, and update responses.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub content: String,
}

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            content: message.content.clone(),
        }
    }
}

/// Create response: the one place the generated id is returned.
#[derive(Debug, Serialize)]
pub struct MessageResponseWithId {
    pub content: String,
    pub id: Uuid,
}

impl From<&Message> for MessageResponseWithId {
    fn from(message: &Message) -> Self {
        Self {
            content: message.content.clone(),
            id: message.id,
        }
    }
}

/// Pagination query parameters (zero-indexed)
#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub size: i64,
}

fn default_page_size() -> i64 {
    20
}

#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub items: Vec<MessageResponse>,
    pub page: i64,
    pub size: i64,
    pub total: i64,
}

impl From<Page> for PageResponse {
    fn from(page: Page) -> Self {
        Self {
            items: page.items.iter().map(MessageResponse::from).collect(),
            page: page.page,
            size: page.size,
            total: page.total,
        }
    }
}

/// Get a message by id. Open to any authenticated caller.
pub async fn get_message(
    service: web::Data<MessageService>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let message = service.get(*id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::from(&message)))
}

/// List messages, paginated. Open to any authenticated caller.
pub async fn list_messages(
    service: web::Data<MessageService>,
    query: web::Query<PageParams>,
) -> Result<HttpResponse> {
    let page = service.list(query.page, query.size).await?;
    Ok(HttpResponse::Ok().json(PageResponse::from(page)))
}

/// Create a message. The owner is the authenticated principal, resolved to
/// its client row here -- not taken from the request body.
pub async fn create_message(
    messages: web::Data<MessageService>,
    clients: web::Data<ClientService>,
    principal: Principal,
    req: web::Json<CreateMessageRequest>,
) -> Result<HttpResponse> {
    let client = clients.get_by_username(&principal.0).await?;
    let message = messages.create(&req.content, client.id).await?;

    tracing::info!(message_id = %message.id, owner = %principal.0, "message created");

    let location = format!("/api/v1/messages/{}", message.id);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(MessageResponseWithId::from(&message)))
}

/// Update a message's content. Owner only; the guard raises 404 for
/// missing ids and 403 for non-owners, in that precedence.
pub async fn update_message(
    messages: web::Data<MessageService>,
    id: web::Path<Uuid>,
    principal: Principal,
    req: web::Json<CreateMessageRequest>,
) -> Result<HttpResponse> {
    ownership::require_owner(messages.repository(), *id, &principal.0).await?;

    let message = messages.update(*id, &req.content).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::from(&message)))
}

/// Delete a message. Owner only; same guard precedence as update.
pub async fn delete_message(
    messages: web::Data<MessageService>,
    id: web::Path<Uuid>,
    principal: Principal,
) -> Result<HttpResponse> {
    let id = id.into_inner();
    ownership::require_owner(messages.repository(), id, &principal.0).await?;

    messages.delete(id).await?;
    tracing::info!(message_id = %id, owner = %principal.0, "message deleted");

    Ok(HttpResponse::NoContent().finish())
}
