//! Ports (interfaces) for review persistence adapters.
//!
//! Both ports are generic over a session handle `S` supplied by a
//! [`TransactionCoordinator`](crate::transaction::TransactionCoordinator),
//! so a service can compose several port calls into one atomic unit of
//! work.

mod directory;
mod store;

pub use directory::{DirectoryError, DirectoryResult, UserDirectory};
pub use store::{PullRequestStore, StoreError, StoreResult};
