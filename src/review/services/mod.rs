//! Orchestration services for the review workflow.
//!
//! Services compose the directory and store ports inside transactions
//! provided by a [`TransactionCoordinator`](crate::transaction::TransactionCoordinator),
//! so each operation either fully applies or leaves no trace.

mod error;
mod lifecycle;
mod roster;
mod selection;

pub use error::{WorkflowError, WorkflowResult};
pub use lifecycle::{CreatePullRequestRequest, PullRequestLifecycleService};
pub use roster::{RegisterTeamRequest, TeamRosterService};
pub use selection::{ReviewerPool, Sampler, SeededSampler, ThreadRngSampler};
