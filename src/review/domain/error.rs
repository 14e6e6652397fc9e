//! Error types for review domain validation and parsing.

use super::UserId;
use thiserror::Error;

/// Errors returned while constructing domain review values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewDomainError {
    /// The pull request identifier is empty or exceeds the storage limit.
    #[error("invalid pull request id '{0}', expected 1-64 non-blank characters")]
    InvalidPullRequestId(String),

    /// The user identifier is empty or exceeds the storage limit.
    #[error("invalid user id '{0}', expected 1-64 non-blank characters")]
    InvalidUserId(String),

    /// The team name is empty or exceeds the storage limit.
    #[error("invalid team name '{0}', expected 1-64 non-blank characters")]
    InvalidTeamName(String),

    /// The pull request title is empty or exceeds the storage limit.
    #[error("invalid pull request title '{0}', expected 1-255 non-blank characters")]
    InvalidTitle(String),

    /// A team roster lists the same member identifier twice.
    #[error("duplicate team member: {0}")]
    DuplicateMember(UserId),
}

/// Error returned while parsing pull request statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown pull request status: {0}")]
pub struct ParsePullRequestStatusError(pub String);
