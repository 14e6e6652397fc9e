//! Integration tests for the pull request review workflow over the
//! in-memory adapters.
//!
//! Covers the full lifecycle: opening with automatic reviewer
//! assignment, merging, and reviewer workload queries.

use crate::in_memory::helpers::{ReviewHarness, harness, register_dev_team, user_ids};
use capstan::review::domain::{PullRequestId, PullRequestStatus, UserId};
use capstan::review::services::{CreatePullRequestRequest, RegisterTeamRequest, WorkflowError};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_review_cycle_for_a_submission(harness: ReviewHarness) -> Result<(), eyre::Report> {
    register_dev_team(&harness.roster).await?;

    let created = harness
        .lifecycle
        .create(CreatePullRequestRequest::new(
            "pr-1",
            "Introduce retry budget",
            "u1",
        ))
        .await
        .expect("create should succeed");
    assert_eq!(created.pull_request.status(), PullRequestStatus::Open);
    assert_eq!(created.reviewers, user_ids(&["u2", "u3"])?);

    let pull_request_id = PullRequestId::new("pr-1")?;
    let rotated = harness
        .lifecycle
        .reassign(&pull_request_id, &UserId::new("u2")?)
        .await
        .expect("reassign should succeed");
    assert_eq!(rotated.replaced, UserId::new("u2")?);
    assert_eq!(rotated.reviewers, user_ids(&["u3", "u4"])?);

    let merged = harness
        .lifecycle
        .merge(&pull_request_id)
        .await
        .expect("merge should succeed");
    assert_eq!(merged.pull_request.status(), PullRequestStatus::Merged);
    assert!(merged.pull_request.merged_at().is_some());
    assert_eq!(merged.reviewers, user_ids(&["u3", "u4"])?);

    let after_merge = harness
        .lifecycle
        .reassign(&pull_request_id, &UserId::new("u3")?)
        .await;
    assert!(matches!(
        after_merge,
        Err(WorkflowError::AlreadyMerged(ref id)) if id.as_str() == "pr-1"
    ));

    let reviewing = harness
        .lifecycle
        .assignments(&UserId::new("u4")?)
        .await
        .expect("assignments should succeed");
    assert!(reviewing.iter().any(|found| found.id() == &pull_request_id));

    let rotated_out = harness
        .lifecycle
        .assignments(&UserId::new("u2")?)
        .await
        .expect("assignments should succeed");
    assert!(rotated_out.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reviewer_load_spreads_across_pull_requests(
    harness: ReviewHarness,
) -> Result<(), eyre::Report> {
    register_dev_team(&harness.roster).await?;

    harness
        .lifecycle
        .create(CreatePullRequestRequest::new("pr-1", "First change", "u1"))
        .await
        .expect("first create should succeed");
    harness
        .lifecycle
        .create(CreatePullRequestRequest::new("pr-2", "Second change", "u2"))
        .await
        .expect("second create should succeed");
    harness
        .lifecycle
        .create(CreatePullRequestRequest::new("pr-3", "Third change", "u3"))
        .await
        .expect("third create should succeed");

    // Assignments per author: pr-1 by u1 gets {u2, u3}, pr-2 by u2 gets
    // {u1, u3}, pr-3 by u3 gets {u1, u2}.
    let expected: &[(&str, &[&str])] = &[
        ("u1", &["pr-2", "pr-3"]),
        ("u2", &["pr-1", "pr-3"]),
        ("u3", &["pr-1", "pr-2"]),
        ("u4", &[]),
    ];
    for (reviewer, pull_requests) in expected {
        let assigned = harness
            .lifecycle
            .assignments(&UserId::new(*reviewer)?)
            .await
            .expect("assignments should succeed");
        let ids: Vec<&str> = assigned.iter().map(|found| found.id().as_str()).collect();
        assert_eq!(&ids, pull_requests, "workload mismatch for {reviewer}");
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deactivated_member_stops_receiving_assignments(
    harness: ReviewHarness,
) -> Result<(), eyre::Report> {
    register_dev_team(&harness.roster).await?;

    harness
        .roster
        .set_active(&UserId::new("u3")?, false)
        .await
        .expect("deactivation should succeed");
    let while_inactive = harness
        .lifecycle
        .create(CreatePullRequestRequest::new("pr-1", "Change one", "u1"))
        .await
        .expect("create should succeed");
    assert_eq!(while_inactive.reviewers, user_ids(&["u2", "u4"])?);

    harness
        .roster
        .set_active(&UserId::new("u3")?, true)
        .await
        .expect("reactivation should succeed");
    let after_return = harness
        .lifecycle
        .create(CreatePullRequestRequest::new("pr-2", "Change two", "u1"))
        .await
        .expect("create should succeed");
    assert_eq!(after_return.reviewers, user_ids(&["u2", "u3"])?);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn teams_do_not_cross_pollinate(harness: ReviewHarness) -> Result<(), eyre::Report> {
    register_dev_team(&harness.roster).await?;
    harness
        .roster
        .register_team(
            RegisterTeamRequest::new("ops")
                .with_member("o1", "olga", true)
                .with_member("o2", "omar", true)
                .with_member("o3", "otis", true),
        )
        .await
        .expect("ops registration should succeed");

    let created = harness
        .lifecycle
        .create(CreatePullRequestRequest::new(
            "pr-1",
            "Tighten alert thresholds",
            "o1",
        ))
        .await
        .expect("create should succeed");

    // Reviewers come from the author's team only, never from `dev`.
    assert_eq!(created.reviewers, user_ids(&["o2", "o3"])?);
    Ok(())
}
