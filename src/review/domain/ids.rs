//! Identifier and validated scalar types for the review domain.

use super::ReviewDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for an identifier stored in a `VARCHAR(64)` column.
const MAX_IDENTIFIER_LENGTH: usize = 64;

/// Maximum length for a title stored in a `VARCHAR(255)` column.
const MAX_TITLE_LENGTH: usize = 255;

/// Validates a trimmed identifier against emptiness and the column limit.
fn is_invalid_identifier(value: &str) -> bool {
    value.is_empty() || value.len() > MAX_IDENTIFIER_LENGTH
}

/// Caller-supplied unique identifier for a pull request.
///
/// # Examples
///
///     use capstan::review::domain::PullRequestId;
///
///     let id = PullRequestId::new("pr-1001").expect("valid");
///     assert_eq!(id.as_str(), "pr-1001");
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PullRequestId(String);

impl PullRequestId {
    /// Creates a validated pull request identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewDomainError::InvalidPullRequestId`] when the value is
    /// blank after trimming or exceeds the storage limit.
    pub fn new(value: impl Into<String>) -> Result<Self, ReviewDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if is_invalid_identifier(normalized) {
            return Err(ReviewDomainError::InvalidPullRequestId(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PullRequestId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PullRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for PullRequestId {
    type Error = ReviewDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Unique identifier for a user in the team directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a validated user identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewDomainError::InvalidUserId`] when the value is blank
    /// after trimming or exceeds the storage limit.
    pub fn new(value: impl Into<String>) -> Result<Self, ReviewDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if is_invalid_identifier(normalized) {
            return Err(ReviewDomainError::InvalidUserId(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for UserId {
    type Error = ReviewDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Unique name of a review team.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamName(String);

impl TeamName {
    /// Creates a validated team name.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewDomainError::InvalidTeamName`] when the value is
    /// blank after trimming or exceeds the storage limit.
    pub fn new(value: impl Into<String>) -> Result<Self, ReviewDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if is_invalid_identifier(normalized) {
            return Err(ReviewDomainError::InvalidTeamName(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the team name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TeamName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for TeamName {
    type Error = ReviewDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Human-readable pull request title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PullRequestTitle(String);

impl PullRequestTitle {
    /// Creates a validated pull request title.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewDomainError::InvalidTitle`] when the value is blank
    /// after trimming or exceeds the storage limit.
    pub fn new(value: impl Into<String>) -> Result<Self, ReviewDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() || normalized.len() > MAX_TITLE_LENGTH {
            return Err(ReviewDomainError::InvalidTitle(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PullRequestTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PullRequestTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
