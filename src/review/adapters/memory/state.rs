//! Shared state behind the in-memory adapters.

use crate::review::domain::{PullRequestId, PullRequestStatus, PullRequestTitle, TeamName, UserId};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};

/// A user row in the in-memory directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UserRecord {
    pub(crate) username: String,
    pub(crate) team: TeamName,
    pub(crate) active: bool,
}

/// A pull request row in the in-memory store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PullRequestRecord {
    pub(crate) title: PullRequestTitle,
    pub(crate) author_id: UserId,
    pub(crate) status: PullRequestStatus,
    pub(crate) merged_at: Option<DateTime<Utc>>,
}

/// Full state of the in-memory backend.
///
/// `BTreeMap` keys keep iteration ordered by identifier, so candidate
/// listings are stable across runs.
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryState {
    pub(crate) teams: BTreeSet<TeamName>,
    pub(crate) users: BTreeMap<UserId, UserRecord>,
    pub(crate) pull_requests: BTreeMap<PullRequestId, PullRequestRecord>,
    pub(crate) reviewers: BTreeMap<PullRequestId, BTreeSet<UserId>>,
}

/// Session handle over a staged copy of the in-memory state.
///
/// The coordinator clones the committed state into the session; adapters
/// mutate the copy, and the coordinator writes it back only when the unit
/// of work succeeds.
#[derive(Debug)]
pub struct MemorySession {
    staged: MemoryState,
}

impl MemorySession {
    pub(crate) const fn new(staged: MemoryState) -> Self {
        Self { staged }
    }

    pub(crate) const fn state(&self) -> &MemoryState {
        &self.staged
    }

    pub(crate) const fn state_mut(&mut self) -> &mut MemoryState {
        &mut self.staged
    }

    pub(crate) fn into_state(self) -> MemoryState {
        self.staged
    }
}
