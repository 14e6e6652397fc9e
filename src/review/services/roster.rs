//! Service layer for team registration and roster management.

use crate::review::domain::{ReviewDomainError, Team, TeamMember, TeamName, User, UserId};
use crate::review::ports::UserDirectory;
use crate::review::services::error::{WorkflowError, WorkflowResult};
use crate::transaction::TransactionCoordinator;
use std::sync::Arc;

/// Request payload for registering a team with its initial roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterTeamRequest {
    name: String,
    members: Vec<MemberEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MemberEntry {
    id: String,
    username: String,
    active: bool,
}

impl RegisterTeamRequest {
    /// Creates a request for a team with an empty roster.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Adds a roster member.
    #[must_use]
    pub fn with_member(
        mut self,
        id: impl Into<String>,
        username: impl Into<String>,
        active: bool,
    ) -> Self {
        self.members.push(MemberEntry {
            id: id.into(),
            username: username.into(),
            active,
        });
        self
    }

    fn into_domain(self) -> Result<Team, ReviewDomainError> {
        let name = TeamName::new(self.name)?;
        let members = self
            .members
            .into_iter()
            .map(|entry| {
                Ok(TeamMember::new(
                    UserId::new(entry.id)?,
                    entry.username,
                    entry.active,
                ))
            })
            .collect::<Result<Vec<_>, ReviewDomainError>>()?;
        Team::new(name, members)
    }
}

/// Team roster orchestration service.
#[derive(Clone)]
pub struct TeamRosterService<T, D>
where
    T: TransactionCoordinator,
    D: UserDirectory<T::Session> + 'static,
{
    coordinator: Arc<T>,
    directory: Arc<D>,
}

impl<T, D> TeamRosterService<T, D>
where
    T: TransactionCoordinator,
    D: UserDirectory<T::Session> + 'static,
{
    /// Creates a new roster service.
    #[must_use]
    pub const fn new(coordinator: Arc<T>, directory: Arc<D>) -> Self {
        Self {
            coordinator,
            directory,
        }
    }

    /// Registers a team and its initial roster.
    ///
    /// Roster entries for users already known to the directory move them
    /// onto this team and refresh their username and active flag.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::TeamAlreadyExists`] when the name is taken
    /// and [`WorkflowError::Domain`] when a field fails validation.
    pub async fn register_team(&self, request: RegisterTeamRequest) -> WorkflowResult<Team> {
        let team = request.into_domain()?;
        let directory = Arc::clone(&self.directory);
        self.coordinator
            .run(move |session| {
                if directory.find_team(session, team.name())?.is_some() {
                    return Err(WorkflowError::TeamAlreadyExists(team.name().clone()));
                }
                Ok(directory.register_team(session, &team)?)
            })
            .await
    }

    /// Retrieves a team and its roster.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::TeamNotFound`] when no team carries the
    /// name.
    pub async fn roster(&self, name: &TeamName) -> WorkflowResult<Team> {
        let directory = Arc::clone(&self.directory);
        let team_name = name.clone();
        self.coordinator
            .run(move |session| {
                directory
                    .find_team(session, &team_name)?
                    .ok_or_else(|| WorkflowError::TeamNotFound(team_name.clone()))
            })
            .await
    }

    /// Sets a user's availability for review assignments.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::UserNotFound`] when the user is not in the
    /// directory.
    pub async fn set_active(&self, id: &UserId, active: bool) -> WorkflowResult<User> {
        let directory = Arc::clone(&self.directory);
        let user_id = id.clone();
        self.coordinator
            .run(move |session| {
                directory
                    .set_active(session, &user_id, active)?
                    .ok_or_else(|| WorkflowError::UserNotFound(user_id.clone()))
            })
            .await
    }
}
