//! Transaction coordinator backed by a `PostgreSQL` connection pool.

use crate::transaction::{SessionError, TransactionCoordinator};
use async_trait::async_trait;
use diesel::Connection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by review adapters.
pub type ReviewPgPool = Pool<ConnectionManager<PgConnection>>;

/// Coordinator that opens one database transaction per unit of work.
///
/// Diesel connections are blocking, so each unit of work is offloaded to
/// the runtime's blocking thread pool. The session handle passed to the
/// unit of work is the raw transaction-scoped connection.
#[derive(Debug, Clone)]
pub struct PgTransactionCoordinator {
    pool: ReviewPgPool,
}

impl PgTransactionCoordinator {
    /// Creates a coordinator from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ReviewPgPool) -> Self {
        Self { pool }
    }
}

/// Separates unit-of-work failures from transaction boundary failures
/// inside [`Connection::transaction`], which requires its error type to
/// absorb Diesel commit and rollback errors.
enum TxError<E> {
    Operation(E),
    Boundary(diesel::result::Error),
}

impl<E> From<diesel::result::Error> for TxError<E> {
    fn from(err: diesel::result::Error) -> Self {
        Self::Boundary(err)
    }
}

#[async_trait]
impl TransactionCoordinator for PgTransactionCoordinator {
    type Session = PgConnection;

    async fn run<T, E, F>(&self, op: F) -> Result<T, E>
    where
        T: Send + 'static,
        E: From<SessionError> + Send + 'static,
        F: FnOnce(&mut Self::Session) -> Result<T, E> + Send + 'static,
    {
        let pool = self.pool.clone();
        let outcome = tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(|err| TxError::Operation(E::from(SessionError::connection(err))))?;
            connection.transaction(|session| op(session).map_err(TxError::Operation))
        })
        .await
        .map_err(|err| E::from(SessionError::runtime(err)))?;
        outcome.map_err(|err| match err {
            TxError::Operation(inner) => inner,
            TxError::Boundary(inner) => E::from(SessionError::transaction(inner)),
        })
    }
}
