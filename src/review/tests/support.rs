//! Shared fixtures and deterministic doubles for review tests.

use crate::review::adapters::memory::{
    InMemoryCoordinator, MemoryPullRequestStore, MemoryUserDirectory,
};
use crate::review::domain::{PullRequestId, Team, TeamMember, TeamName, UserId};
use crate::review::services::{
    PullRequestLifecycleService, RegisterTeamRequest, Sampler, TeamRosterService,
};
use mockable::DefaultClock;
use rstest::fixture;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Sampler that picks the first candidates in directory order.
///
/// Both memory and `PostgreSQL` directories list candidates in ascending
/// identifier order, so selections made through this sampler are fully
/// predictable.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadSampler;

impl Sampler for HeadSampler {
    fn draw(&self, candidates: &[UserId], take: usize) -> Vec<UserId> {
        candidates.iter().take(take).cloned().collect()
    }
}

/// Lifecycle service wired to the in-memory backend with head sampling.
pub type TestLifecycle = PullRequestLifecycleService<
    InMemoryCoordinator,
    MemoryUserDirectory,
    MemoryPullRequestStore,
    DefaultClock,
    HeadSampler,
>;

/// Roster service sharing the lifecycle service's backend.
pub type TestRoster = TeamRosterService<InMemoryCoordinator, MemoryUserDirectory>;

/// Lifecycle and roster services over one shared in-memory backend.
pub struct ReviewHarness {
    pub lifecycle: TestLifecycle,
    pub roster: TestRoster,
}

/// Provides a fresh harness over empty state for each test.
#[fixture]
pub fn harness() -> ReviewHarness {
    let coordinator = Arc::new(InMemoryCoordinator::new());
    let directory = Arc::new(MemoryUserDirectory::new());
    let lifecycle = PullRequestLifecycleService::new(
        Arc::clone(&coordinator),
        Arc::clone(&directory),
        Arc::new(MemoryPullRequestStore::new()),
        Arc::new(DefaultClock),
        Arc::new(HeadSampler),
    );
    let roster = TeamRosterService::new(coordinator, directory);
    ReviewHarness { lifecycle, roster }
}

/// Registers the standard four-member team used across workflow tests.
pub async fn register_dev_team(roster: &TestRoster) {
    roster
        .register_team(
            RegisterTeamRequest::new("dev")
                .with_member("u1", "ada", true)
                .with_member("u2", "brian", true)
                .with_member("u3", "chen", true)
                .with_member("u4", "dara", true),
        )
        .await
        .expect("team registration should succeed");
}

/// Builds a validated pull request identifier.
pub fn pull_request_id(value: &str) -> PullRequestId {
    PullRequestId::new(value).expect("valid pull request id")
}

/// Builds a validated user identifier.
pub fn user_id(value: &str) -> UserId {
    UserId::new(value).expect("valid user id")
}

/// Builds a set of validated user identifiers.
pub fn user_ids(values: &[&str]) -> BTreeSet<UserId> {
    values.iter().map(|value| user_id(value)).collect()
}

/// Builds a validated team name.
pub fn team_name(value: &str) -> TeamName {
    TeamName::new(value).expect("valid team name")
}

/// Builds a roster entry.
pub fn member(id: &str, username: &str, active: bool) -> TeamMember {
    TeamMember::new(user_id(id), username.to_owned(), active)
}

/// Builds a team from a name and roster entries.
pub fn team(name: &str, members: Vec<TeamMember>) -> Team {
    Team::new(team_name(name), members).expect("valid team")
}
