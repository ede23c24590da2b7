/// Message repository
///
/// Every read resolves the owner's username with a JOIN on `clients` so a
/// fetched `Message` is self-contained for authorization and response
/// mapping. Mutations report through `Option`/`bool` (rows affected);
/// mapping absence to NotFound is the service layer's job.
use crate::models::Message;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Exact lookup by id, owner resolved eagerly.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, sqlx::Error>;

    /// Stable slice of all messages in insertion order.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Message>, sqlx::Error>;

    /// Total number of stored messages.
    async fn count(&self) -> Result<i64, sqlx::Error>;

    /// Insert a message owned by `client_id`; the store generates the id.
    async fn insert(&self, content: &str, client_id: Uuid) -> Result<Message, sqlx::Error>;

    /// Replace `content` only; owner and id are untouched.
    /// Returns `None` when `id` does not exist.
    async fn update_content(&self, id: Uuid, content: &str)
        -> Result<Option<Message>, sqlx::Error>;

    /// Returns `false` when `id` does not exist (including a second delete
    /// of an already-deleted id).
    async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error>;
}

/// Postgres-backed message repository
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, sqlx::Error> {
        sqlx::query_as::<_, Message>(
            r#"
            SELECT m.id, m.content, m.client_id, c.username AS owner_username,
                   m.created_at, m.updated_at
            FROM messages m
            JOIN clients c ON m.client_id = c.id
            WHERE m.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Message>, sqlx::Error> {
        sqlx::query_as::<_, Message>(
            r#"
            SELECT m.id, m.content, m.client_id, c.username AS owner_username,
                   m.created_at, m.updated_at
            FROM messages m
            JOIN clients c ON m.client_id = c.id
            ORDER BY m.created_at, m.id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
    }

    async fn count(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM messages")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    async fn insert(&self, content: &str, client_id: Uuid) -> Result<Message, sqlx::Error> {
        sqlx::query_as::<_, Message>(
            r#"
            WITH inserted AS (
                INSERT INTO messages (content, client_id)
                VALUES ($1, $2)
                RETURNING id, content, client_id, created_at, updated_at
            )
            SELECT i.id, i.content, i.client_id, c.username AS owner_username,
                   i.created_at, i.updated_at
            FROM inserted i
            JOIN clients c ON i.client_id = c.id
            "#,
        )
        .bind(content)
        .bind(client_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_content(
        &self,
        id: Uuid,
        content: &str,
    ) -> Result<Option<Message>, sqlx::Error> {
        sqlx::query_as::<_, Message>(
            r#"
            WITH updated AS (
                UPDATE messages
                SET content = $2, updated_at = NOW()
                WHERE id = $1
                RETURNING id, content, client_id, created_at, updated_at
            )
            SELECT u.id, u.content, u.client_id, c.username AS owner_username,
                   u.created_at, u.updated_at
            FROM updated u
            JOIN clients c ON u.client_id = c.id
            "#,
        )
        .bind(id)
        .bind(content)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
