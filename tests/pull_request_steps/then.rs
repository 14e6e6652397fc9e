//! Then steps for pull request review workflow BDD scenarios.

use super::world::{ReviewWorld, run_async, split_ids};
use capstan::review::domain::{PullRequestId, PullRequestStatus, UserId};
use capstan::review::services::WorkflowError;
use rstest_bdd_macros::then;
use std::collections::BTreeSet;

/// Parses a comma-separated reviewer list into a validated identifier set.
fn reviewer_set(raw: &str) -> Result<BTreeSet<UserId>, eyre::Report> {
    split_ids(raw)
        .into_iter()
        .map(|id| UserId::new(id).map_err(|err| eyre::eyre!("invalid reviewer id: {err}")))
        .collect()
}

#[then(r#"the pull request is open with reviewers "{reviewers}""#)]
fn pull_request_open_with_reviewers(
    world: &ReviewWorld,
    reviewers: String,
) -> Result<(), eyre::Report> {
    let result = world
        .last_create
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;
    let snapshot = result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected create failure: {err}"))?;
    if snapshot.pull_request.status() != PullRequestStatus::Open {
        return Err(eyre::eyre!(
            "expected an open pull request, got {:?}",
            snapshot.pull_request.status()
        ));
    }
    let expected = reviewer_set(&reviewers)?;
    if snapshot.reviewers != expected {
        return Err(eyre::eyre!(
            "expected reviewers {expected:?}, got {:?}",
            snapshot.reviewers
        ));
    }
    Ok(())
}

#[then("opening fails because the identifier is taken")]
fn opening_fails_identifier_taken(world: &ReviewWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;
    if !matches!(result, Err(WorkflowError::AlreadyExists(_))) {
        return Err(eyre::eyre!("expected AlreadyExists error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"reviewer "{reviewer}" is replaced and the reviewers are "{reviewers}""#)]
fn reviewer_replaced(
    world: &ReviewWorld,
    reviewer: String,
    reviewers: String,
) -> Result<(), eyre::Report> {
    let result = world
        .last_reassign
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing reassign result in scenario world"))?;
    let outcome = result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected reassign failure: {err}"))?;
    if outcome.replaced.as_str() != reviewer {
        return Err(eyre::eyre!(
            "expected replaced reviewer {reviewer}, got {}",
            outcome.replaced
        ));
    }
    let expected = reviewer_set(&reviewers)?;
    if outcome.reviewers != expected {
        return Err(eyre::eyre!(
            "expected reviewers {expected:?}, got {:?}",
            outcome.reviewers
        ));
    }
    Ok(())
}

#[then("rotation fails because the pull request is merged")]
fn rotation_fails_merged(world: &ReviewWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_reassign
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing reassign result in scenario world"))?;
    if !matches!(result, Err(WorkflowError::AlreadyMerged(_))) {
        return Err(eyre::eyre!("expected AlreadyMerged error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the reviewers of pull request "{id}" are still "{reviewers}""#)]
fn reviewers_unchanged(
    world: &ReviewWorld,
    id: String,
    reviewers: String,
) -> Result<(), eyre::Report> {
    let pull_request_id = PullRequestId::new(id)?;
    // Merging is idempotent, so a repeat merge reads back the stored
    // reviewer set without changing it.
    let snapshot = run_async(world.lifecycle.merge(&pull_request_id))
        .map_err(|err| eyre::eyre!("reviewer read-back failed: {err}"))?;
    let expected = reviewer_set(&reviewers)?;
    if snapshot.reviewers != expected {
        return Err(eyre::eyre!(
            "expected reviewers {expected:?}, got {:?}",
            snapshot.reviewers
        ));
    }
    Ok(())
}
