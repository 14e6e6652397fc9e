//! Schema provisioning for the `PostgreSQL` adapter.

use diesel::QueryResult;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;

const CREATE_REVIEW_TABLES: &str =
    include_str!("../../../../migrations/2026-08-20-000000_create_review_tables/up.sql");

/// Applies the review schema to the connected database.
///
/// The statements are idempotent, so repeated provisioning against the
/// same database is harmless.
///
/// # Errors
///
/// Returns the underlying [`diesel::result::Error`] if any statement
/// fails to execute.
pub fn provision_schema(connection: &mut PgConnection) -> QueryResult<()> {
    connection.batch_execute(CREATE_REVIEW_TABLES)
}
