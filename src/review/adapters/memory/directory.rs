//! In-memory directory adapter.

use crate::review::adapters::memory::state::{MemorySession, UserRecord};
use crate::review::domain::{Team, TeamMember, TeamName, User, UserId};
use crate::review::ports::{DirectoryError, DirectoryResult, UserDirectory};
use std::collections::BTreeSet;

/// Directory over the session's staged state.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryUserDirectory;

impl MemoryUserDirectory {
    /// Creates the directory adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn user_from_record(id: &UserId, record: &UserRecord) -> User {
    User::new(
        id.clone(),
        record.username.clone(),
        record.team.clone(),
        record.active,
    )
}

fn team_from_state(session: &MemorySession, name: &TeamName) -> DirectoryResult<Team> {
    let members: Vec<TeamMember> = session
        .state()
        .users
        .iter()
        .filter(|(_, record)| record.team == *name)
        .map(|(id, record)| TeamMember::new(id.clone(), record.username.clone(), record.active))
        .collect();
    Team::new(name.clone(), members).map_err(DirectoryError::backend)
}

impl UserDirectory<MemorySession> for MemoryUserDirectory {
    fn register_team(&self, session: &mut MemorySession, team: &Team) -> DirectoryResult<Team> {
        let state = session.state_mut();
        if !state.teams.insert(team.name().clone()) {
            return Err(DirectoryError::DuplicateTeam(team.name().clone()));
        }
        for member in team.members() {
            state.users.insert(
                member.id().clone(),
                UserRecord {
                    username: member.username().to_owned(),
                    team: team.name().clone(),
                    active: member.active(),
                },
            );
        }
        team_from_state(session, team.name())
    }

    fn find_team(
        &self,
        session: &mut MemorySession,
        name: &TeamName,
    ) -> DirectoryResult<Option<Team>> {
        if !session.state().teams.contains(name) {
            return Ok(None);
        }
        team_from_state(session, name).map(Some)
    }

    fn find_user(&self, session: &mut MemorySession, id: &UserId) -> DirectoryResult<Option<User>> {
        Ok(session
            .state()
            .users
            .get(id)
            .map(|record| user_from_record(id, record)))
    }

    fn set_active(
        &self,
        session: &mut MemorySession,
        id: &UserId,
        active: bool,
    ) -> DirectoryResult<Option<User>> {
        Ok(session.state_mut().users.get_mut(id).map(|record| {
            record.active = active;
            user_from_record(id, record)
        }))
    }

    fn active_candidates(
        &self,
        session: &mut MemorySession,
        team: &TeamName,
        exclude: &BTreeSet<UserId>,
    ) -> DirectoryResult<Vec<UserId>> {
        // Ascending id order, so seeded samplers see a stable list.
        Ok(session
            .state()
            .users
            .iter()
            .filter(|(id, record)| {
                record.team == *team && record.active && !exclude.contains(*id)
            })
            .map(|(id, _)| id.clone())
            .collect())
    }
}
