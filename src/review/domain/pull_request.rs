//! Pull request aggregate and its lifecycle status.

use super::{ParsePullRequestStatusError, PullRequestId, PullRequestTitle, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Maximum number of reviewers assigned when a pull request is opened.
pub const MAX_REVIEWERS: usize = 2;

/// Lifecycle state of a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PullRequestStatus {
    /// The pull request is awaiting review.
    Open,
    /// The pull request has been merged and can no longer change reviewers.
    Merged,
}

impl PullRequestStatus {
    /// Returns the canonical storage representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Merged => "MERGED",
        }
    }
}

impl TryFrom<&str> for PullRequestStatus {
    type Error = ParsePullRequestStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "OPEN" => Ok(Self::Open),
            "MERGED" => Ok(Self::Merged),
            other => Err(ParsePullRequestStatusError(other.to_owned())),
        }
    }
}

/// Request payload for opening a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPullRequest {
    id: PullRequestId,
    title: PullRequestTitle,
    author_id: UserId,
}

impl NewPullRequest {
    /// Bundles the validated fields of a pull request to be opened.
    #[must_use]
    pub const fn new(id: PullRequestId, title: PullRequestTitle, author_id: UserId) -> Self {
        Self {
            id,
            title,
            author_id,
        }
    }

    /// Returns the caller-supplied identifier.
    #[must_use]
    pub const fn id(&self) -> &PullRequestId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &PullRequestTitle {
        &self.title
    }

    /// Returns the author identifier.
    #[must_use]
    pub const fn author_id(&self) -> &UserId {
        &self.author_id
    }
}

/// Field bundle for reconstructing a [`PullRequest`] from storage.
///
/// Adapters populate this from persisted rows; invariants are assumed to
/// have been enforced when the pull request was first created.
#[derive(Debug, Clone)]
pub struct PersistedPullRequestData {
    /// Stored pull request identifier.
    pub id: PullRequestId,
    /// Stored title.
    pub title: PullRequestTitle,
    /// Stored author identifier.
    pub author_id: UserId,
    /// Stored lifecycle status.
    pub status: PullRequestStatus,
    /// Timestamp of the first merge, if any.
    pub merged_at: Option<DateTime<Utc>>,
}

/// A tracked pull request.
///
/// Instances are created through [`PullRequest::open`] for new submissions
/// or [`PullRequest::from_persisted`] when loading from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    id: PullRequestId,
    title: PullRequestTitle,
    author_id: UserId,
    status: PullRequestStatus,
    merged_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    /// Creates a freshly opened pull request with no merge timestamp.
    #[must_use]
    pub fn open(request: &NewPullRequest) -> Self {
        Self {
            id: request.id().clone(),
            title: request.title().clone(),
            author_id: request.author_id().clone(),
            status: PullRequestStatus::Open,
            merged_at: None,
        }
    }

    /// Reconstructs a pull request from persisted state.
    #[must_use]
    pub fn from_persisted(data: PersistedPullRequestData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            author_id: data.author_id,
            status: data.status,
            merged_at: data.merged_at,
        }
    }

    /// Returns the pull request identifier.
    #[must_use]
    pub const fn id(&self) -> &PullRequestId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &PullRequestTitle {
        &self.title
    }

    /// Returns the author identifier.
    #[must_use]
    pub const fn author_id(&self) -> &UserId {
        &self.author_id
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> PullRequestStatus {
        self.status
    }

    /// Returns the timestamp of the first merge, if the pull request has
    /// been merged.
    #[must_use]
    pub const fn merged_at(&self) -> Option<DateTime<Utc>> {
        self.merged_at
    }

    /// Reports whether the pull request has been merged.
    #[must_use]
    pub const fn is_merged(&self) -> bool {
        matches!(self.status, PullRequestStatus::Merged)
    }
}

/// A pull request together with its currently assigned reviewers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestSnapshot {
    /// The pull request itself.
    pub pull_request: PullRequest,
    /// Identifiers of the assigned reviewers.
    pub reviewers: BTreeSet<UserId>,
}

/// Result of swapping one reviewer for another on an open pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReassignmentOutcome {
    /// The pull request after the swap.
    pub pull_request: PullRequest,
    /// The reviewer set after the swap.
    pub reviewers: BTreeSet<UserId>,
    /// The reviewer that was rotated out.
    pub replaced: UserId,
}
