/// Client service - resolves the acting principal's persistent identity
use crate::db::ClientRepository;
use crate::error::{AppError, Result};
use crate::models::Client;
use std::sync::Arc;

pub struct ClientService {
    repo: Arc<dyn ClientRepository>,
}

impl ClientService {
    pub fn new(repo: Arc<dyn ClientRepository>) -> Self {
        Self { repo }
    }

    /// Look up the client behind an authenticated username. A valid token
    /// for a username with no client row is a credential problem, not a
    /// missing resource, so the failure is Unauthorized rather than
    /// NotFound.
    pub async fn get_by_username(&self, username: &str) -> Result<Client> {
        self.repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::Unauthorized(format!("unknown client: {username}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryStore;

    #[tokio::test]
    async fn resolves_seeded_client() {
        let store = Arc::new(InMemoryStore::new());
        let seeded = store.seed_client("alice");
        let service = ClientService::new(store);

        let client = service.get_by_username("alice").await.unwrap();
        assert_eq!(client.id, seeded.id);
        assert_eq!(client.username, "alice");
    }

    #[tokio::test]
    async fn unknown_username_is_unauthorized() {
        let store = Arc::new(InMemoryStore::new());
        let service = ClientService::new(store);

        let err = service.get_by_username("ghost").await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
