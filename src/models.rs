/// Data models for the message store
///
/// Two entities only: a message and its owning client. Clients are created
/// out-of-band (seeded into the database); this API never mutates them.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A client identity. `username` is unique and immutable; there is no
/// rename operation anywhere in the system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// A stored message. The owner reference (`client_id`) is set at creation
/// and never reassigned; `owner_username` is resolved eagerly by the
/// repository JOIN so the ownership check and response mapping never need
/// a second lookup.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Message {
    pub id: Uuid,
    pub content: String,
    pub client_id: Uuid,
    pub owner_username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
