//! `PostgreSQL` adapters for review persistence.

mod coordinator;
mod directory;
pub(crate) mod models;
mod provision;
mod schema;
mod store;

pub use coordinator::{PgTransactionCoordinator, ReviewPgPool};
pub use directory::PgUserDirectory;
pub use provision::provision_schema;
pub use store::PgPullRequestStore;
pub(crate) use store::row_to_pull_request;
