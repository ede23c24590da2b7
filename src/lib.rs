/// Message Store Service Library
///
/// A multi-tenant message storage service: authenticated clients create,
/// read, update, and delete short text messages they own. Listing and
/// reading are open to any authenticated caller; update and delete are
/// restricted to the message's owner.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and DTOs for the message endpoints
/// - `models`: Data structures for messages and clients
/// - `services`: Business logic layer (CRUD orchestration, pagination)
/// - `db`: Repository traits with Postgres and in-memory implementations
/// - `auth`: Bearer-token middleware and the ownership authorizer
/// - `error`: Error types and HTTP status mapping
/// - `config`: Configuration management
/// - `openapi`: OpenAPI document served alongside the API
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
