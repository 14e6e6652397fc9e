//! Domain model for pull request review tracking.
//!
//! The review domain models pull requests, their reviewer links, and the
//! team directory they draw reviewers from, keeping all infrastructure
//! concerns outside of the domain boundary.

mod error;
mod ids;
mod pull_request;
mod team;

pub use error::{ParsePullRequestStatusError, ReviewDomainError};
pub use ids::{PullRequestId, PullRequestTitle, TeamName, UserId};
pub use pull_request::{
    MAX_REVIEWERS, NewPullRequest, PersistedPullRequestData, PullRequest, PullRequestSnapshot,
    PullRequestStatus, ReassignmentOutcome,
};
pub use team::{Team, TeamMember, User};
