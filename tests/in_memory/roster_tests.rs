//! Integration tests for roster management and its effect on reviewer
//! selection.

use crate::in_memory::helpers::{ReviewHarness, harness, register_dev_team, user_ids};
use capstan::review::domain::{TeamName, UserId};
use capstan::review::services::{CreatePullRequestRequest, RegisterTeamRequest};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn roster_changes_flow_through_to_reviewer_selection(
    harness: ReviewHarness,
) -> Result<(), eyre::Report> {
    harness
        .roster
        .register_team(
            RegisterTeamRequest::new("dev")
                .with_member("u1", "ada", true)
                .with_member("u2", "brian", true)
                .with_member("u3", "chen", false)
                .with_member("u4", "dara", false),
        )
        .await
        .expect("registration should succeed");

    let first = harness
        .lifecycle
        .create(CreatePullRequestRequest::new("pr-1", "Initial change", "u1"))
        .await
        .expect("create should succeed");
    assert_eq!(first.reviewers, user_ids(&["u2"])?);

    harness
        .roster
        .set_active(&UserId::new("u3")?, true)
        .await
        .expect("activation should succeed");
    let second = harness
        .lifecycle
        .create(CreatePullRequestRequest::new("pr-2", "Second change", "u1"))
        .await
        .expect("create should succeed");
    assert_eq!(second.reviewers, user_ids(&["u2", "u3"])?);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moving_a_user_between_teams_redirects_their_candidacy(
    harness: ReviewHarness,
) -> Result<(), eyre::Report> {
    register_dev_team(&harness.roster).await?;

    // Registering `ops` with u3 on its roster moves u3 off `dev`.
    harness
        .roster
        .register_team(
            RegisterTeamRequest::new("ops")
                .with_member("x1", "xena", true)
                .with_member("u3", "chen", true),
        )
        .await
        .expect("ops registration should succeed");

    let dev_roster = harness
        .roster
        .roster(&TeamName::new("dev")?)
        .await
        .expect("roster lookup should succeed");
    assert!(
        dev_roster
            .members()
            .iter()
            .all(|member| member.id().as_str() != "u3")
    );

    let dev_created = harness
        .lifecycle
        .create(CreatePullRequestRequest::new("pr-1", "Dev change", "u1"))
        .await
        .expect("create should succeed");
    assert_eq!(dev_created.reviewers, user_ids(&["u2", "u4"])?);

    let ops_created = harness
        .lifecycle
        .create(CreatePullRequestRequest::new("pr-2", "Ops change", "x1"))
        .await
        .expect("create should succeed");
    assert_eq!(ops_created.reviewers, user_ids(&["u3"])?);
    Ok(())
}
