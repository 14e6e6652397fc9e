//! `PostgreSQL` pull request store adapter.

use super::models::{NewPullRequestRow, NewReviewerRow, PullRequestRow};
use super::schema::{pr_reviewers, pull_requests};
use crate::review::domain::{
    NewPullRequest, PersistedPullRequestData, PullRequest, PullRequestId, PullRequestStatus,
    PullRequestTitle, UserId,
};
use crate::review::ports::{PullRequestStore, StoreError, StoreResult};
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use std::collections::BTreeSet;

/// `PostgreSQL`-backed pull request store.
#[derive(Debug, Clone, Copy, Default)]
pub struct PgPullRequestStore;

impl PgPullRequestStore {
    /// Creates the store adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

pub(crate) fn row_to_pull_request(row: PullRequestRow) -> StoreResult<PullRequest> {
    let id = PullRequestId::new(row.id).map_err(StoreError::backend)?;
    let title = PullRequestTitle::new(row.title).map_err(StoreError::backend)?;
    let author_id = UserId::new(row.author_id).map_err(StoreError::backend)?;
    let status = PullRequestStatus::try_from(row.status.as_str()).map_err(StoreError::backend)?;
    Ok(PullRequest::from_persisted(PersistedPullRequestData {
        id,
        title,
        author_id,
        status,
        merged_at: row.merged_at,
    }))
}

fn is_pull_request_fk_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "pr_reviewers_pull_request_id_fkey")
}

impl PullRequestStore<PgConnection> for PgPullRequestStore {
    fn insert(
        &self,
        session: &mut PgConnection,
        request: &NewPullRequest,
    ) -> StoreResult<PullRequest> {
        let new_row = NewPullRequestRow {
            id: request.id().as_str().to_owned(),
            title: request.title().as_str().to_owned(),
            author_id: request.author_id().as_str().to_owned(),
            status: PullRequestStatus::Open.as_str().to_owned(),
            merged_at: None,
        };
        let row = diesel::insert_into(pull_requests::table)
            .values(&new_row)
            .returning(PullRequestRow::as_returning())
            .get_result::<PullRequestRow>(session)
            .map_err(|err| match err {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    StoreError::DuplicatePullRequest(request.id().clone())
                }
                _ => StoreError::backend(err),
            })?;
        row_to_pull_request(row)
    }

    fn find_by_id(
        &self,
        session: &mut PgConnection,
        id: &PullRequestId,
    ) -> StoreResult<Option<PullRequest>> {
        let row = pull_requests::table
            .filter(pull_requests::id.eq(id.as_str()))
            .select(PullRequestRow::as_select())
            .first::<PullRequestRow>(session)
            .optional()
            .map_err(StoreError::backend)?;
        row.map(row_to_pull_request).transpose()
    }

    fn mark_merged(
        &self,
        session: &mut PgConnection,
        id: &PullRequestId,
        merged_at: DateTime<Utc>,
    ) -> StoreResult<PullRequest> {
        // COALESCE keeps the first merge timestamp on repeated merges.
        let row = diesel::sql_query(concat!(
            "UPDATE pull_requests SET status = 'MERGED', ",
            "merged_at = COALESCE(merged_at, $1) ",
            "WHERE id = $2 ",
            "RETURNING id, title, author_id, status, merged_at",
        ))
        .bind::<diesel::sql_types::Timestamptz, _>(merged_at)
        .bind::<diesel::sql_types::Text, _>(id.as_str())
        .get_result::<PullRequestRow>(session)
        .optional()
        .map_err(StoreError::backend)?
        .ok_or_else(|| StoreError::MissingPullRequest(id.clone()))?;
        row_to_pull_request(row)
    }

    fn link_reviewers(
        &self,
        session: &mut PgConnection,
        id: &PullRequestId,
        reviewers: &BTreeSet<UserId>,
    ) -> StoreResult<BTreeSet<UserId>> {
        for reviewer in reviewers {
            let link = NewReviewerRow {
                pull_request_id: id.as_str().to_owned(),
                reviewer_id: reviewer.as_str().to_owned(),
            };
            diesel::insert_into(pr_reviewers::table)
                .values(&link)
                .execute(session)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        StoreError::DuplicateReviewer {
                            pull_request: id.clone(),
                            reviewer: reviewer.clone(),
                        }
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, ref info)
                        if is_pull_request_fk_violation(info.as_ref()) =>
                    {
                        StoreError::MissingPullRequest(id.clone())
                    }
                    _ => StoreError::backend(err),
                })?;
        }
        self.list_reviewers(session, id)
    }

    fn list_reviewers(
        &self,
        session: &mut PgConnection,
        id: &PullRequestId,
    ) -> StoreResult<BTreeSet<UserId>> {
        pr_reviewers::table
            .filter(pr_reviewers::pull_request_id.eq(id.as_str()))
            .select(pr_reviewers::reviewer_id)
            .load::<String>(session)
            .map_err(StoreError::backend)?
            .into_iter()
            .map(|reviewer| UserId::new(reviewer).map_err(StoreError::backend))
            .collect()
    }

    fn replace_reviewer(
        &self,
        session: &mut PgConnection,
        id: &PullRequestId,
        old_reviewer: &UserId,
        new_reviewer: &UserId,
    ) -> StoreResult<()> {
        // Conditional write: the swap applies only if the outgoing
        // reviewer is still linked when the update executes, so a
        // concurrent swap of the same reviewer cannot apply twice.
        let updated = diesel::update(
            pr_reviewers::table
                .filter(pr_reviewers::pull_request_id.eq(id.as_str()))
                .filter(pr_reviewers::reviewer_id.eq(old_reviewer.as_str())),
        )
        .set(pr_reviewers::reviewer_id.eq(new_reviewer.as_str()))
        .execute(session)
        .map_err(|err| match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                StoreError::DuplicateReviewer {
                    pull_request: id.clone(),
                    reviewer: new_reviewer.clone(),
                }
            }
            _ => StoreError::backend(err),
        })?;
        if updated == 0 {
            return Err(StoreError::ReviewerNotLinked(old_reviewer.clone()));
        }
        Ok(())
    }

    fn reviewed_by(
        &self,
        session: &mut PgConnection,
        reviewer: &UserId,
    ) -> StoreResult<Vec<PullRequest>> {
        let rows = pr_reviewers::table
            .inner_join(pull_requests::table)
            .filter(pr_reviewers::reviewer_id.eq(reviewer.as_str()))
            .order(pull_requests::id.asc())
            .select(PullRequestRow::as_select())
            .load::<PullRequestRow>(session)
            .map_err(StoreError::backend)?;
        rows.into_iter().map(row_to_pull_request).collect()
    }
}
