//! Directory port for team registration and user lookup.

use crate::review::domain::{Team, TeamName, User, UserId};
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Team and user directory contract.
///
/// Every method takes the session handle of the enclosing unit of work, so
/// directory reads observe writes staged earlier in the same transaction.
pub trait UserDirectory<S>: Send + Sync {
    /// Registers a team and upserts its roster members.
    ///
    /// Roster entries for already-known users overwrite the stored
    /// username, team, and active flag. Returns the roster as stored.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::DuplicateTeam`] when the team name is
    /// already registered.
    fn register_team(&self, session: &mut S, team: &Team) -> DirectoryResult<Team>;

    /// Finds a team and its roster by name.
    ///
    /// Returns `None` when the team does not exist.
    fn find_team(&self, session: &mut S, name: &TeamName) -> DirectoryResult<Option<Team>>;

    /// Finds a user by identifier.
    ///
    /// Returns `None` when the user does not exist.
    fn find_user(&self, session: &mut S, id: &UserId) -> DirectoryResult<Option<User>>;

    /// Sets a user's availability for review assignments.
    ///
    /// Returns the updated user, or `None` when the user does not exist.
    fn set_active(
        &self,
        session: &mut S,
        id: &UserId,
        active: bool,
    ) -> DirectoryResult<Option<User>>;

    /// Lists identifiers of active members of `team` that are not in
    /// `exclude`.
    ///
    /// Candidates come back in the adapter's natural order; callers that
    /// need randomisation apply it themselves.
    fn active_candidates(
        &self,
        session: &mut S,
        team: &TeamName,
        exclude: &BTreeSet<UserId>,
    ) -> DirectoryResult<Vec<UserId>>;
}

/// Errors returned by directory implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// A team with the same name already exists.
    #[error("duplicate team name: {0}")]
    DuplicateTeam(TeamName),

    /// Backing-store failure.
    #[error("directory backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
