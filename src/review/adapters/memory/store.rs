//! In-memory pull request store adapter.

use crate::review::adapters::memory::state::{MemorySession, PullRequestRecord};
use crate::review::domain::{
    NewPullRequest, PersistedPullRequestData, PullRequest, PullRequestId, PullRequestStatus,
    UserId,
};
use crate::review::ports::{PullRequestStore, StoreError, StoreResult};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// Pull request store over the session's staged state.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryPullRequestStore;

impl MemoryPullRequestStore {
    /// Creates the store adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn pull_request_from_record(id: &PullRequestId, record: &PullRequestRecord) -> PullRequest {
    PullRequest::from_persisted(PersistedPullRequestData {
        id: id.clone(),
        title: record.title.clone(),
        author_id: record.author_id.clone(),
        status: record.status,
        merged_at: record.merged_at,
    })
}

impl PullRequestStore<MemorySession> for MemoryPullRequestStore {
    fn insert(
        &self,
        session: &mut MemorySession,
        request: &NewPullRequest,
    ) -> StoreResult<PullRequest> {
        let state = session.state_mut();
        if state.pull_requests.contains_key(request.id()) {
            return Err(StoreError::DuplicatePullRequest(request.id().clone()));
        }
        state.pull_requests.insert(
            request.id().clone(),
            PullRequestRecord {
                title: request.title().clone(),
                author_id: request.author_id().clone(),
                status: PullRequestStatus::Open,
                merged_at: None,
            },
        );
        Ok(PullRequest::open(request))
    }

    fn find_by_id(
        &self,
        session: &mut MemorySession,
        id: &PullRequestId,
    ) -> StoreResult<Option<PullRequest>> {
        Ok(session
            .state()
            .pull_requests
            .get(id)
            .map(|record| pull_request_from_record(id, record)))
    }

    fn mark_merged(
        &self,
        session: &mut MemorySession,
        id: &PullRequestId,
        merged_at: DateTime<Utc>,
    ) -> StoreResult<PullRequest> {
        let record = session
            .state_mut()
            .pull_requests
            .get_mut(id)
            .ok_or_else(|| StoreError::MissingPullRequest(id.clone()))?;
        record.status = PullRequestStatus::Merged;
        record.merged_at.get_or_insert(merged_at);
        Ok(pull_request_from_record(id, record))
    }

    fn link_reviewers(
        &self,
        session: &mut MemorySession,
        id: &PullRequestId,
        reviewers: &BTreeSet<UserId>,
    ) -> StoreResult<BTreeSet<UserId>> {
        let state = session.state_mut();
        if !state.pull_requests.contains_key(id) {
            return Err(StoreError::MissingPullRequest(id.clone()));
        }
        let linked = state.reviewers.entry(id.clone()).or_default();
        for reviewer in reviewers {
            if !linked.insert(reviewer.clone()) {
                return Err(StoreError::DuplicateReviewer {
                    pull_request: id.clone(),
                    reviewer: reviewer.clone(),
                });
            }
        }
        Ok(linked.clone())
    }

    fn list_reviewers(
        &self,
        session: &mut MemorySession,
        id: &PullRequestId,
    ) -> StoreResult<BTreeSet<UserId>> {
        Ok(session
            .state()
            .reviewers
            .get(id)
            .cloned()
            .unwrap_or_default())
    }

    fn replace_reviewer(
        &self,
        session: &mut MemorySession,
        id: &PullRequestId,
        old_reviewer: &UserId,
        new_reviewer: &UserId,
    ) -> StoreResult<()> {
        let linked = session
            .state_mut()
            .reviewers
            .get_mut(id)
            .ok_or_else(|| StoreError::ReviewerNotLinked(old_reviewer.clone()))?;
        if !linked.remove(old_reviewer) {
            return Err(StoreError::ReviewerNotLinked(old_reviewer.clone()));
        }
        if !linked.insert(new_reviewer.clone()) {
            // The staged session is discarded on error, so the removal
            // above never reaches the committed state.
            return Err(StoreError::DuplicateReviewer {
                pull_request: id.clone(),
                reviewer: new_reviewer.clone(),
            });
        }
        Ok(())
    }

    fn reviewed_by(
        &self,
        session: &mut MemorySession,
        reviewer: &UserId,
    ) -> StoreResult<Vec<PullRequest>> {
        let state = session.state();
        Ok(state
            .reviewers
            .iter()
            .filter(|(_, linked)| linked.contains(reviewer))
            .filter_map(|(id, _)| {
                state
                    .pull_requests
                    .get(id)
                    .map(|record| pull_request_from_record(id, record))
            })
            .collect())
    }
}
