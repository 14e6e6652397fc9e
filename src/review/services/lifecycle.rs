//! Service layer for the pull request review workflow.

use crate::review::domain::{
    MAX_REVIEWERS, NewPullRequest, PullRequest, PullRequestId, PullRequestSnapshot,
    PullRequestTitle, ReassignmentOutcome, ReviewDomainError, UserId,
};
use crate::review::ports::{PullRequestStore, UserDirectory};
use crate::review::services::error::{WorkflowError, WorkflowResult};
use crate::review::services::selection::{ReviewerPool, Sampler};
use crate::transaction::TransactionCoordinator;
use mockable::Clock;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Request payload for opening a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePullRequestRequest {
    id: String,
    title: String,
    author_id: String,
}

impl CreatePullRequestRequest {
    /// Creates a request from raw identifier, title, and author fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author_id: author_id.into(),
        }
    }

    fn into_domain(self) -> Result<NewPullRequest, ReviewDomainError> {
        let id = PullRequestId::new(self.id)?;
        let title = PullRequestTitle::new(self.title)?;
        let author_id = UserId::new(self.author_id)?;
        Ok(NewPullRequest::new(id, title, author_id))
    }
}

/// Pull request workflow orchestration service.
///
/// Every operation executes inside one transaction obtained from the
/// coordinator, so a failure at any step rolls the whole operation back
/// and leaves no partial state behind.
#[derive(Clone)]
pub struct PullRequestLifecycleService<T, D, S, C, R>
where
    T: TransactionCoordinator,
    D: UserDirectory<T::Session> + 'static,
    S: PullRequestStore<T::Session> + 'static,
    C: Clock + Send + Sync,
    R: Sampler + 'static,
{
    coordinator: Arc<T>,
    directory: Arc<D>,
    store: Arc<S>,
    clock: Arc<C>,
    pool: ReviewerPool<D, R>,
}

impl<T, D, S, C, R> PullRequestLifecycleService<T, D, S, C, R>
where
    T: TransactionCoordinator,
    D: UserDirectory<T::Session> + 'static,
    S: PullRequestStore<T::Session> + 'static,
    C: Clock + Send + Sync,
    R: Sampler + 'static,
{
    /// Creates a new lifecycle service.
    #[must_use]
    pub fn new(
        coordinator: Arc<T>,
        directory: Arc<D>,
        store: Arc<S>,
        clock: Arc<C>,
        sampler: Arc<R>,
    ) -> Self {
        let pool = ReviewerPool::new(Arc::clone(&directory), sampler);
        Self {
            coordinator,
            directory,
            store,
            clock,
            pool,
        }
    }

    /// Opens a pull request and assigns up to two reviewers from the
    /// author's team.
    ///
    /// The author is never selected. When fewer than two eligible
    /// teammates exist the pull request is still created, with however
    /// many reviewers could be drawn, including none.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::AlreadyExists`] when the identifier is
    /// taken, [`WorkflowError::UserNotFound`] when the author is not in
    /// the directory, and [`WorkflowError::Domain`] when a field fails
    /// validation.
    pub async fn create(
        &self,
        request: CreatePullRequestRequest,
    ) -> WorkflowResult<PullRequestSnapshot> {
        let new_pull_request = request.into_domain()?;
        let directory = Arc::clone(&self.directory);
        let store = Arc::clone(&self.store);
        let pool = self.pool.clone();
        self.coordinator
            .run(move |session| {
                if store.find_by_id(session, new_pull_request.id())?.is_some() {
                    return Err(WorkflowError::AlreadyExists(new_pull_request.id().clone()));
                }
                let author = directory
                    .find_user(session, new_pull_request.author_id())?
                    .ok_or_else(|| {
                        WorkflowError::UserNotFound(new_pull_request.author_id().clone())
                    })?;
                let pull_request = store.insert(session, &new_pull_request)?;
                let exclude = BTreeSet::from([new_pull_request.author_id().clone()]);
                let selected: BTreeSet<UserId> = pool
                    .select_up_to(session, author.team(), &exclude, MAX_REVIEWERS)?
                    .into_iter()
                    .collect();
                let reviewers = store.link_reviewers(session, pull_request.id(), &selected)?;
                Ok(PullRequestSnapshot {
                    pull_request,
                    reviewers,
                })
            })
            .await
    }

    /// Marks a pull request merged and returns it with its reviewers.
    ///
    /// Merging is idempotent: repeated calls succeed and keep the
    /// timestamp of the first merge.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::PullRequestNotFound`] when the pull
    /// request does not exist.
    pub async fn merge(&self, id: &PullRequestId) -> WorkflowResult<PullRequestSnapshot> {
        let store = Arc::clone(&self.store);
        let pull_request_id = id.clone();
        let now = self.clock.utc();
        self.coordinator
            .run(move |session| {
                let merged = store.mark_merged(session, &pull_request_id, now)?;
                let reviewers = store.list_reviewers(session, &pull_request_id)?;
                Ok(PullRequestSnapshot {
                    pull_request: merged,
                    reviewers,
                })
            })
            .await
    }

    /// Replaces one assigned reviewer with a freshly drawn teammate.
    ///
    /// The replacement is drawn from the author's team, excluding the
    /// author and everyone already assigned. The outgoing reviewer must
    /// currently be assigned and share the author's team.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::PullRequestNotFound`] when the pull
    /// request does not exist, [`WorkflowError::AlreadyMerged`] when it
    /// has been merged, [`WorkflowError::UserNotFound`] when the author or
    /// outgoing reviewer is missing from the directory,
    /// [`WorkflowError::CrossTeam`] when the outgoing reviewer is on a
    /// different team, [`WorkflowError::ReviewerNotAssigned`] when the
    /// outgoing reviewer is not assigned, and
    /// [`WorkflowError::NoCandidate`] when no eligible teammate remains.
    pub async fn reassign(
        &self,
        id: &PullRequestId,
        old_reviewer: &UserId,
    ) -> WorkflowResult<ReassignmentOutcome> {
        let directory = Arc::clone(&self.directory);
        let store = Arc::clone(&self.store);
        let pool = self.pool.clone();
        let pull_request_id = id.clone();
        let outgoing_id = old_reviewer.clone();
        self.coordinator
            .run(move |session| {
                let pull_request = store
                    .find_by_id(session, &pull_request_id)?
                    .ok_or_else(|| WorkflowError::PullRequestNotFound(pull_request_id.clone()))?;
                if pull_request.is_merged() {
                    return Err(WorkflowError::AlreadyMerged(pull_request_id.clone()));
                }
                let author = directory
                    .find_user(session, pull_request.author_id())?
                    .ok_or_else(|| {
                        WorkflowError::UserNotFound(pull_request.author_id().clone())
                    })?;
                let outgoing = directory
                    .find_user(session, &outgoing_id)?
                    .ok_or_else(|| WorkflowError::UserNotFound(outgoing_id.clone()))?;
                if outgoing.team() != author.team() {
                    return Err(WorkflowError::CrossTeam {
                        reviewer: outgoing_id.clone(),
                        team: author.team().clone(),
                    });
                }
                let reviewers = store.list_reviewers(session, &pull_request_id)?;
                if !reviewers.contains(&outgoing_id) {
                    return Err(WorkflowError::ReviewerNotAssigned(outgoing_id.clone()));
                }
                let mut exclude = reviewers;
                exclude.insert(pull_request.author_id().clone());
                let replacement = pool
                    .select_replacement(session, author.team(), &exclude)?
                    .ok_or_else(|| WorkflowError::NoCandidate(author.team().clone()))?;
                store.replace_reviewer(session, &pull_request_id, &outgoing_id, &replacement)?;
                let refreshed = store
                    .find_by_id(session, &pull_request_id)?
                    .ok_or_else(|| WorkflowError::PullRequestNotFound(pull_request_id.clone()))?;
                let updated = store.list_reviewers(session, &pull_request_id)?;
                Ok(ReassignmentOutcome {
                    pull_request: refreshed,
                    reviewers: updated,
                    replaced: outgoing_id,
                })
            })
            .await
    }

    /// Lists the pull requests the reviewer is currently assigned to.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::UserNotFound`] when the reviewer is not in
    /// the directory.
    pub async fn assignments(&self, reviewer: &UserId) -> WorkflowResult<Vec<PullRequest>> {
        let directory = Arc::clone(&self.directory);
        let store = Arc::clone(&self.store);
        let reviewer_id = reviewer.clone();
        self.coordinator
            .run(move |session| {
                if directory.find_user(session, &reviewer_id)?.is_none() {
                    return Err(WorkflowError::UserNotFound(reviewer_id.clone()));
                }
                Ok(store.reviewed_by(session, &reviewer_id)?)
            })
            .await
    }
}
