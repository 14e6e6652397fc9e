//! In-memory adapters for unit tests and verification harnesses.
//!
//! [`InMemoryCoordinator`] stages a copy of the shared state per unit of
//! work and commits it atomically, mirroring the transactional behaviour
//! of the `PostgreSQL` adapters without a database.

mod coordinator;
mod directory;
mod state;
mod store;

pub use coordinator::InMemoryCoordinator;
pub use directory::MemoryUserDirectory;
pub use state::MemorySession;
pub use store::MemoryPullRequestStore;
