//! Shared world state for pull request review workflow BDD scenarios.

use capstan::review::adapters::memory::{
    InMemoryCoordinator, MemoryPullRequestStore, MemoryUserDirectory,
};
use capstan::review::domain::{PullRequestSnapshot, ReassignmentOutcome, UserId};
use capstan::review::services::{
    PullRequestLifecycleService, Sampler, TeamRosterService, WorkflowError,
};
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;

/// Sampler that picks the first candidates in directory order.
///
/// The in-memory directory lists candidates in ascending identifier
/// order, so scenario outcomes are fully predictable.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadSampler;

impl Sampler for HeadSampler {
    fn draw(&self, candidates: &[UserId], take: usize) -> Vec<UserId> {
        candidates.iter().take(take).cloned().collect()
    }
}

/// Lifecycle service type used by the BDD world.
pub type TestLifecycle = PullRequestLifecycleService<
    InMemoryCoordinator,
    MemoryUserDirectory,
    MemoryPullRequestStore,
    DefaultClock,
    HeadSampler,
>;

/// Roster service type used by the BDD world.
pub type TestRoster = TeamRosterService<InMemoryCoordinator, MemoryUserDirectory>;

/// Scenario world for pull request review workflow behaviour tests.
pub struct ReviewWorld {
    pub lifecycle: TestLifecycle,
    pub roster: TestRoster,
    pub last_create: Option<Result<PullRequestSnapshot, WorkflowError>>,
    pub last_reassign: Option<Result<ReassignmentOutcome, WorkflowError>>,
}

impl ReviewWorld {
    /// Creates a world over empty shared state.
    #[must_use]
    pub fn new() -> Self {
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
        Self {
            lifecycle,
            roster,
            last_create: None,
            last_reassign: None,
        }
    }
}

impl Default for ReviewWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ReviewWorld {
    ReviewWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Splits a comma-separated identifier list from a scenario argument.
pub fn split_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim().to_owned())
        .filter(|part| !part.is_empty())
        .collect()
}
