/// Ownership authorizer
///
/// A message may only be mutated by its creator. The predicate looks the
/// message up (owner resolved eagerly by the repository JOIN) and compares
/// usernames with exact string equality. A missing message is a hard
/// NotFound failure, never a `false` result, so callers cannot confuse
/// "not authorized" with "does not exist" -- and the API surfaces 404, not
/// 403, for ids that were never there.
use crate::db::MessageRepository;
use crate::error::{AppError, Result};
use uuid::Uuid;

/// True iff `username` owns the message. Read-only.
pub async fn is_owner(
    repo: &dyn MessageRepository,
    message_id: Uuid,
    username: &str,
) -> Result<bool> {
    let message = repo
        .find_by_id(message_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("message {message_id} not found")))?;

    Ok(message.owner_username == username)
}

/// Guard-clause form: called at the top of each mutating handler, before
/// the store operation is invoked.
pub async fn require_owner(
    repo: &dyn MessageRepository,
    message_id: Uuid,
    username: &str,
) -> Result<()> {
    if is_owner(repo, message_id, username).await? {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "you don't have permission to modify this message".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryStore;

    #[tokio::test]
    async fn owner_matches_only_the_creator() {
        let store = InMemoryStore::new();
        let alice = store.seed_client("alice");
        store.seed_client("bob");
        let message = store.insert("hello", alice.id).await.unwrap();

        assert!(is_owner(&store, message.id, "alice").await.unwrap());
        assert!(!is_owner(&store, message.id, "bob").await.unwrap());
    }

    #[tokio::test]
    async fn missing_message_is_not_found_not_false() {
        let store = InMemoryStore::new();

        let err = is_owner(&store, Uuid::new_v4(), "alice").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn require_owner_rejects_non_owner() {
        let store = InMemoryStore::new();
        let alice = store.seed_client("alice");
        let message = store.insert("hello", alice.id).await.unwrap();

        assert!(require_owner(&store, message.id, "alice").await.is_ok());

        let err = require_owner(&store, message.id, "bob").await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn not_found_takes_precedence_over_forbidden() {
        let store = InMemoryStore::new();
        store.seed_client("bob");

        let err = require_owner(&store, Uuid::new_v4(), "bob")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
