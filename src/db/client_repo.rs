/// Client repository
///
/// Read-only: clients are provisioned out-of-band, this API only resolves
/// the acting principal's persistent identity before message creation.
use crate::models::Client;
use async_trait::async_trait;
use sqlx::PgPool;

#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<Client>, sqlx::Error>;
}

/// Postgres-backed client repository
pub struct PgClientRepository {
    pool: PgPool,
}

impl PgClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for PgClientRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Client>, sqlx::Error> {
        sqlx::query_as::<_, Client>(
            "SELECT id, username, created_at FROM clients WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
    }
}
