//! Teams, their rosters, and directory users.

use super::{ReviewDomainError, TeamName, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A member entry on a team roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    id: UserId,
    username: String,
    active: bool,
}

impl TeamMember {
    /// Creates a roster entry.
    #[must_use]
    pub const fn new(id: UserId, username: String, active: bool) -> Self {
        Self {
            id,
            username,
            active,
        }
    }

    /// Returns the member's user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the member's display name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Reports whether the member currently accepts review assignments.
    #[must_use]
    pub const fn active(&self) -> bool {
        self.active
    }
}

/// A review team and its full roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    name: TeamName,
    members: Vec<TeamMember>,
}

impl Team {
    /// Creates a team from a name and roster.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewDomainError::DuplicateMember`] when two roster
    /// entries carry the same user identifier.
    pub fn new(name: TeamName, members: Vec<TeamMember>) -> Result<Self, ReviewDomainError> {
        let mut seen = BTreeSet::new();
        for member in &members {
            if !seen.insert(member.id().clone()) {
                return Err(ReviewDomainError::DuplicateMember(member.id().clone()));
            }
        }
        Ok(Self { name, members })
    }

    /// Returns the team name.
    #[must_use]
    pub const fn name(&self) -> &TeamName {
        &self.name
    }

    /// Returns the roster entries.
    #[must_use]
    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }
}

/// A user as recorded in the team directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,
    team: TeamName,
    active: bool,
}

impl User {
    /// Creates a directory user record.
    #[must_use]
    pub const fn new(id: UserId, username: String, team: TeamName, active: bool) -> Self {
        Self {
            id,
            username,
            team,
            active,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the team the user belongs to.
    #[must_use]
    pub const fn team(&self) -> &TeamName {
        &self.team
    }

    /// Reports whether the user currently accepts review assignments.
    #[must_use]
    pub const fn active(&self) -> bool {
        self.active
    }
}
