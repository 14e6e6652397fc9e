//! Shared test helpers for in-memory review integration tests.

use capstan::review::adapters::memory::{
    InMemoryCoordinator, MemoryPullRequestStore, MemoryUserDirectory,
};
use capstan::review::domain::{ReviewDomainError, UserId};
use capstan::review::services::{
    PullRequestLifecycleService, RegisterTeamRequest, Sampler, TeamRosterService,
};
use mockable::DefaultClock;
use rstest::fixture;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Sampler that picks the first candidates in directory order.
///
/// The in-memory directory lists candidates in ascending identifier
/// order, so selections made through this sampler are fully predictable.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadSampler;

impl Sampler for HeadSampler {
    fn draw(&self, candidates: &[UserId], take: usize) -> Vec<UserId> {
        candidates.iter().take(take).cloned().collect()
    }
}

/// Lifecycle service type used by the integration tests.
pub type TestLifecycle = PullRequestLifecycleService<
    InMemoryCoordinator,
    MemoryUserDirectory,
    MemoryPullRequestStore,
    DefaultClock,
    HeadSampler,
>;

/// Roster service type used by the integration tests.
pub type TestRoster = TeamRosterService<InMemoryCoordinator, MemoryUserDirectory>;

/// Review services wired over one shared in-memory backend.
pub struct ReviewHarness {
    /// Shared transaction coordinator.
    pub coordinator: Arc<InMemoryCoordinator>,
    /// Shared user directory.
    pub directory: Arc<MemoryUserDirectory>,
    /// Pull request workflow service.
    pub lifecycle: TestLifecycle,
    /// Team roster service.
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
    let roster = TeamRosterService::new(Arc::clone(&coordinator), Arc::clone(&directory));
    ReviewHarness {
        coordinator,
        directory,
        lifecycle,
        roster,
    }
}

/// Registers a four-member team named `dev` with identifiers `u1`-`u4`.
///
/// # Errors
///
/// Returns an error if registration fails.
pub async fn register_dev_team(roster: &TestRoster) -> Result<(), eyre::Report> {
    roster
        .register_team(
            RegisterTeamRequest::new("dev")
                .with_member("u1", "ada", true)
                .with_member("u2", "brian", true)
                .with_member("u3", "chen", true)
                .with_member("u4", "dara", true),
        )
        .await
        .map_err(|err| eyre::eyre!("register dev team: {err}"))?;
    Ok(())
}

/// Builds a set of validated user identifiers.
///
/// # Errors
///
/// Returns an error when a value fails identifier validation.
pub fn user_ids(values: &[&str]) -> Result<BTreeSet<UserId>, ReviewDomainError> {
    values.iter().map(|value| UserId::new(*value)).collect()
}
