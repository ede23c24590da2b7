/// Business logic layer
///
/// - Message service: CRUD orchestration, pagination, NotFound mapping
/// - Client service: principal-to-client resolution
pub mod clients;
pub mod messages;

pub use clients::ClientService;
pub use messages::{MessageService, Page};
