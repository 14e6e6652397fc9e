//! Diesel row models for review persistence.

use super::schema::{pr_reviewers, pull_requests, teams, users};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for pull request records.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable)]
#[diesel(table_name = pull_requests)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PullRequestRow {
    /// External pull request identifier.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub id: String,
    /// Pull request title.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub title: String,
    /// Author user identifier.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub author_id: String,
    /// Lifecycle status label.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub status: String,
    /// Timestamp of the first merge.
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Timestamptz>)]
    pub merged_at: Option<DateTime<Utc>>,
}

/// Insert model for pull request records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = pull_requests)]
pub struct NewPullRequestRow {
    /// External pull request identifier.
    pub id: String,
    /// Pull request title.
    pub title: String,
    /// Author user identifier.
    pub author_id: String,
    /// Lifecycle status label.
    pub status: String,
    /// Timestamp of the first merge.
    pub merged_at: Option<DateTime<Utc>>,
}

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// External user identifier.
    pub id: String,
    /// Display name.
    pub username: String,
    /// Owning team name.
    pub team_name: String,
    /// Whether the user accepts review assignments.
    pub active: bool,
}

/// Insert and upsert model for user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    /// External user identifier.
    pub id: String,
    /// Display name.
    pub username: String,
    /// Owning team name.
    pub team_name: String,
    /// Whether the user accepts review assignments.
    pub active: bool,
}

/// Insert model for team records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = teams)]
pub struct NewTeamRow {
    /// Unique team name.
    pub name: String,
}

/// Insert model for reviewer links.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = pr_reviewers)]
pub struct NewReviewerRow {
    /// Reviewed pull request identifier.
    pub pull_request_id: String,
    /// Assigned reviewer identifier.
    pub reviewer_id: String,
}
