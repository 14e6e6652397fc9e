//! Pull request review tracking for Capstan.
//!
//! This module implements the review workflow: opening a pull request with
//! up to two reviewers drawn from the author's team, merging with a
//! set-once merge timestamp, rotating a reviewer out for a fresh candidate
//! while the pull request is open, and the team roster operations that feed
//! reviewer selection. Each workflow executes as one unit of work through
//! the [`crate::transaction`] contract. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
