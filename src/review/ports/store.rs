//! Store port for pull request and reviewer-link persistence.

use crate::review::domain::{NewPullRequest, PullRequest, PullRequestId, UserId};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

/// Result type for pull request store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Pull request persistence contract.
///
/// Every method takes the session handle of the enclosing unit of work, so
/// reads observe writes staged earlier in the same transaction.
pub trait PullRequestStore<S>: Send + Sync {
    /// Stores a new open pull request.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicatePullRequest`] when the identifier is
    /// already taken.
    fn insert(&self, session: &mut S, request: &NewPullRequest) -> StoreResult<PullRequest>;

    /// Finds a pull request by identifier.
    ///
    /// Returns `None` when the pull request does not exist.
    fn find_by_id(&self, session: &mut S, id: &PullRequestId)
    -> StoreResult<Option<PullRequest>>;

    /// Marks a pull request merged, keeping the earliest merge timestamp.
    ///
    /// Repeated calls leave the stored timestamp unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingPullRequest`] when the pull request
    /// does not exist.
    fn mark_merged(
        &self,
        session: &mut S,
        id: &PullRequestId,
        merged_at: DateTime<Utc>,
    ) -> StoreResult<PullRequest>;

    /// Links the given reviewers to a pull request.
    ///
    /// Returns the reviewer set as stored after the insert.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingPullRequest`] when the pull request
    /// does not exist and [`StoreError::DuplicateReviewer`] when one of the
    /// reviewers is already linked.
    fn link_reviewers(
        &self,
        session: &mut S,
        id: &PullRequestId,
        reviewers: &BTreeSet<UserId>,
    ) -> StoreResult<BTreeSet<UserId>>;

    /// Lists the reviewers currently linked to a pull request.
    ///
    /// Returns the empty set when the pull request does not exist.
    fn list_reviewers(
        &self,
        session: &mut S,
        id: &PullRequestId,
    ) -> StoreResult<BTreeSet<UserId>>;

    /// Atomically replaces one linked reviewer with another.
    ///
    /// The swap is conditional on `old_reviewer` still being linked when
    /// the write executes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ReviewerNotLinked`] when `old_reviewer` is not
    /// linked to the pull request and [`StoreError::DuplicateReviewer`]
    /// when `new_reviewer` already is.
    fn replace_reviewer(
        &self,
        session: &mut S,
        id: &PullRequestId,
        old_reviewer: &UserId,
        new_reviewer: &UserId,
    ) -> StoreResult<()>;

    /// Returns the pull requests the reviewer is linked to, ordered by
    /// identifier.
    fn reviewed_by(&self, session: &mut S, reviewer: &UserId) -> StoreResult<Vec<PullRequest>>;
}

/// Errors returned by pull request store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A pull request with the same identifier already exists.
    #[error("duplicate pull request identifier: {0}")]
    DuplicatePullRequest(PullRequestId),

    /// The pull request targeted by a write does not exist.
    #[error("pull request not found: {0}")]
    MissingPullRequest(PullRequestId),

    /// The reviewer is already linked to the pull request.
    #[error("reviewer {reviewer} already linked to pull request {pull_request}")]
    DuplicateReviewer {
        /// Pull request the link targeted.
        pull_request: PullRequestId,
        /// Reviewer that was already linked.
        reviewer: UserId,
    },

    /// The reviewer expected on the pull request was not linked.
    #[error("reviewer not linked: {0}")]
    ReviewerNotLinked(UserId),

    /// Backing-store failure.
    #[error("store backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
