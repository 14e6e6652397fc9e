//! Transaction coordinator over the shared in-memory state.

use crate::review::adapters::memory::state::{MemorySession, MemoryState};
use crate::transaction::{SessionError, TransactionCoordinator};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Coordinator that stages a copy of the state per unit of work.
///
/// The write lock is held for the whole unit of work, so concurrent units
/// serialise and each observes the fully committed state of the previous
/// one. A unit that returns an error never reaches the shared state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCoordinator {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryCoordinator {
    /// Creates a coordinator over empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionCoordinator for InMemoryCoordinator {
    type Session = MemorySession;

    async fn run<T, E, F>(&self, op: F) -> Result<T, E>
    where
        T: Send + 'static,
        E: From<SessionError> + Send + 'static,
        F: FnOnce(&mut Self::Session) -> Result<T, E> + Send + 'static,
    {
        let mut guard = self
            .state
            .write()
            .map_err(|err| SessionError::connection(std::io::Error::other(err.to_string())))?;
        let mut session = MemorySession::new(guard.clone());
        let value = op(&mut session)?;
        *guard = session.into_state();
        Ok(value)
    }
}
