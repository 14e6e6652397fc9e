//! Unit-of-work coordination contract shared by every storage backend.
//!
//! A [`TransactionCoordinator`] runs a closure under exactly one transaction
//! against its backend and hands the closure an explicit session handle. The
//! handle is threaded by parameter into every store call made inside the
//! unit of work, so participation in an open transaction is visible in the
//! call graph rather than carried through ambient state.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Runs operations as atomic units of work against a storage backend.
///
/// A call to [`run`](Self::run) owns its transaction boundary: the
/// coordinator begins a transaction, invokes the operation with a mutable
/// [`Session`](Self::Session), commits when the operation returns `Ok`, and
/// rolls back when it returns `Err`. Exactly one commit-or-rollback happens
/// per call, and the operation's error is propagated unchanged.
///
/// Nested participation is structural rather than dynamic: helpers that must
/// join an open unit of work accept `&mut Session` and are called from
/// inside the operation. A session offers no way to begin a second
/// transaction or a savepoint.
///
/// A unit of work runs to completion even when the caller stops polling the
/// returned future, so observers see either the fully committed or the fully
/// rolled back state, never a partial write. Callers impose deadlines by
/// wrapping the future, for example with `tokio::time::timeout`.
#[async_trait]
pub trait TransactionCoordinator: Send + Sync {
    /// Mutable handle representing one open unit of work.
    type Session;

    /// Executes `op` under a single transaction.
    ///
    /// # Errors
    ///
    /// Returns the operation's error unchanged when `op` fails; the
    /// transaction is rolled back first. Failures of the boundary itself
    /// (connection checkout, begin, commit) surface as a [`SessionError`]
    /// converted into the operation's error type. There is no retry.
    async fn run<T, E, F>(&self, op: F) -> Result<T, E>
    where
        T: Send + 'static,
        E: From<SessionError> + Send + 'static,
        F: FnOnce(&mut Self::Session) -> Result<T, E> + Send + 'static;
}

/// Errors raised by the transaction boundary rather than the operation.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// A session could not be opened against the backend.
    #[error("failed to open a session: {0}")]
    Connection(Arc<dyn std::error::Error + Send + Sync>),

    /// The transaction could not be begun, committed, or rolled back.
    #[error("transaction boundary failure: {0}")]
    Transaction(Arc<dyn std::error::Error + Send + Sync>),

    /// The blocking executor running the unit of work failed.
    #[error("unit of work execution failure: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionError {
    /// Wraps a connection-checkout failure.
    pub fn connection(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Connection(Arc::new(err))
    }

    /// Wraps a begin, commit, or rollback failure.
    pub fn transaction(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transaction(Arc::new(err))
    }

    /// Wraps an executor failure.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
