/// In-memory repository implementation
///
/// Substitute storage for isolated tests: implements both repository
/// traits over a single mutex-guarded store so tests can exercise the
/// full handler/service/authorizer stack without Postgres. Messages keep
/// insertion order, matching the stable ordering contract of the
/// Postgres repository.
use crate::models::{Client, Message};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

use super::{ClientRepository, MessageRepository};

#[derive(Default)]
struct StoreInner {
    clients: Vec<Client>,
    messages: Vec<Message>,
}

#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<StoreInner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provision a client, standing in for out-of-band client creation.
    pub fn seed_client(&self, username: &str) -> Client {
        let client = Client {
            id: Uuid::new_v4(),
            username: username.to_string(),
            created_at: Utc::now(),
        };

        let mut inner = self.inner.lock().unwrap();
        inner.clients.push(client.clone());
        client
    }
}

#[async_trait]
impl ClientRepository for InMemoryStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Client>, sqlx::Error> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .clients
            .iter()
            .find(|c| c.username == username)
            .cloned())
    }
}

#[async_trait]
impl MessageRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, sqlx::Error> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.messages.iter().find(|m| m.id == id).cloned())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Message>, sqlx::Error> {
        let inner = self.inner.lock().unwrap();
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(0);

        Ok(inner
            .messages
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, sqlx::Error> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.messages.len() as i64)
    }

    async fn insert(&self, content: &str, client_id: Uuid) -> Result<Message, sqlx::Error> {
        let mut inner = self.inner.lock().unwrap();

        // Mirrors the foreign-key constraint on messages.client_id.
        let owner = inner
            .clients
            .iter()
            .find(|c| c.id == client_id)
            .ok_or(sqlx::Error::RowNotFound)?;

        let now = Utc::now();
        let message = Message {
            id: Uuid::new_v4(),
            content: content.to_string(),
            client_id,
            owner_username: owner.username.clone(),
            created_at: now,
            updated_at: now,
        };

        inner.messages.push(message.clone());
        Ok(message)
    }

    async fn update_content(
        &self,
        id: Uuid,
        content: &str,
    ) -> Result<Option<Message>, sqlx::Error> {
        let mut inner = self.inner.lock().unwrap();

        Ok(inner.messages.iter_mut().find(|m| m.id == id).map(|m| {
            m.content = content.to_string();
            m.updated_at = Utc::now();
            m.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.messages.len();
        inner.messages.retain(|m| m.id != id);

        Ok(inner.messages.len() < before)
    }
}
