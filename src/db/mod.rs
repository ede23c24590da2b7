/// Database access layer
///
/// Repository traits for messages and clients, with Postgres
/// implementations backed by `sqlx::PgPool` and an in-memory
/// implementation used for isolated testing. Services hold an injected
/// repository handle; nothing in here is a process-wide singleton.
pub mod client_repo;
pub mod memory;
pub mod message_repo;

pub use client_repo::{ClientRepository, PgClientRepository};
pub use memory::InMemoryStore;
pub use message_repo::{MessageRepository, PgMessageRepository};
