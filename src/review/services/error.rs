//! Error taxonomy shared by the review workflow services.

use crate::review::domain::{PullRequestId, ReviewDomainError, TeamName, UserId};
use crate::review::ports::{DirectoryError, StoreError};
use crate::transaction::SessionError;
use std::sync::Arc;
use thiserror::Error;

/// Result type for review workflow operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Errors surfaced by the review workflow services.
///
/// Adapter errors with workflow meaning (duplicates, missing rows, stale
/// reviewer links) are mapped onto their semantic variants; everything
/// else collapses into [`WorkflowError::Internal`].
#[derive(Debug, Clone, Error)]
pub enum WorkflowError {
    /// A pull request with the requested identifier already exists.
    #[error("pull request already exists: {0}")]
    AlreadyExists(PullRequestId),

    /// The pull request does not exist.
    #[error("pull request not found: {0}")]
    PullRequestNotFound(PullRequestId),

    /// The user does not exist in the directory.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// The team does not exist.
    #[error("team not found: {0}")]
    TeamNotFound(TeamName),

    /// A team with the requested name already exists.
    #[error("team already exists: {0}")]
    TeamAlreadyExists(TeamName),

    /// The pull request has already been merged.
    #[error("pull request already merged: {0}")]
    AlreadyMerged(PullRequestId),

    /// The reviewer is not currently assigned to the pull request.
    #[error("reviewer not assigned: {0}")]
    ReviewerNotAssigned(UserId),

    /// No eligible replacement reviewer remains on the team.
    #[error("no eligible reviewer candidate on team {0}")]
    NoCandidate(TeamName),

    /// The reviewer belongs to a different team than the author.
    #[error("reviewer {reviewer} is not on team {team}")]
    CrossTeam {
        /// Reviewer that failed the team check.
        reviewer: UserId,
        /// Team of the pull request author.
        team: TeamName,
    },

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ReviewDomainError),

    /// Infrastructure failure outside the workflow's control.
    #[error("internal error: {0}")]
    Internal(Arc<dyn std::error::Error + Send + Sync>),
}

impl WorkflowError {
    /// Wraps an infrastructure error.
    pub fn internal(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Internal(Arc::new(err))
    }
}

impl From<DirectoryError> for WorkflowError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::DuplicateTeam(name) => Self::TeamAlreadyExists(name),
            DirectoryError::Backend(source) => Self::Internal(source),
        }
    }
}

impl From<StoreError> for WorkflowError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicatePullRequest(id) => Self::AlreadyExists(id),
            StoreError::MissingPullRequest(id) => Self::PullRequestNotFound(id),
            StoreError::ReviewerNotLinked(reviewer) => Self::ReviewerNotAssigned(reviewer),
            duplicate @ StoreError::DuplicateReviewer { .. } => Self::internal(duplicate),
            StoreError::Backend(source) => Self::Internal(source),
        }
    }
}

impl From<SessionError> for WorkflowError {
    fn from(err: SessionError) -> Self {
        Self::internal(err)
    }
}
