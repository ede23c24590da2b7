/// Message service - CRUD orchestration over the message repository
///
/// Maps repository absence (`Option`/rows-affected) to NotFound, enforces
/// the non-empty content invariant before anything touches storage, and
/// translates zero-indexed page/size into limit/offset.
use crate::db::MessageRepository;
use crate::error::{AppError, Result};
use crate::models::Message;
use std::sync::Arc;
use uuid::Uuid;

/// Page sizes above this are clamped rather than rejected, matching the
/// behaviour of the framework paginator in the system this replaces.
const MAX_PAGE_SIZE: i64 = 100;

/// A bounded, offset-indexed slice of the message collection.
#[derive(Debug, Clone)]
pub struct Page {
    pub items: Vec<Message>,
    pub page: i64,
    pub size: i64,
    pub total: i64,
}

pub struct MessageService {
    repo: Arc<dyn MessageRepository>,
}

impl MessageService {
    pub fn new(repo: Arc<dyn MessageRepository>) -> Self {
        Self { repo }
    }

    /// The repository handle, for callers that need raw lookups (the
    /// ownership authorizer).
    pub fn repository(&self) -> &dyn MessageRepository {
        self.repo.as_ref()
    }

    pub async fn get(&self, id: Uuid) -> Result<Message> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("message {id} not found")))
    }

    pub async fn list(&self, page: i64, size: i64) -> Result<Page> {
        if page < 0 {
            return Err(AppError::Validation("page must not be negative".into()));
        }
        if size < 1 {
            return Err(AppError::Validation("page size must be positive".into()));
        }

        let size = size.min(MAX_PAGE_SIZE);
        // A page far beyond the data yields an empty slice, not an error.
        let offset = page.saturating_mul(size);

        let items = self.repo.list(size, offset).await?;
        let total = self.repo.count().await?;

        Ok(Page {
            items,
            page,
            size,
            total,
        })
    }

    /// Create a message owned by `client_id`. The owner comes from the
    /// caller's already-resolved identity, never from request input, so a
    /// client cannot forge ownership of a new message to someone else.
    pub async fn create(&self, content: &str, client_id: Uuid) -> Result<Message> {
        validate_content(content)?;
        Ok(self.repo.insert(content, client_id).await?)
    }

    /// Replace a message's content. Owner and id are immutable.
    pub async fn update(&self, id: Uuid, content: &str) -> Result<Message> {
        validate_content(content)?;
        self.repo
            .update_content(id, content)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("message {id} not found")))
    }

    /// Delete a message. A second delete of the same id reports NotFound,
    /// never silent success.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("message {id} not found")))
        }
    }
}

fn validate_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(AppError::Validation("content must not be empty".into()));
    }
    Ok(())
}
