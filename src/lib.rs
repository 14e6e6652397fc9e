//! Capstan: pull request review tracking and reviewer rotation.
//!
//! This crate tracks pull requests within teams and automates reviewer
//! assignment. Opening a pull request draws up to two reviewers from the
//! author's team, merging freezes the reviewer roster, and rotation swaps a
//! single reviewer for a fresh candidate while the pull request is open.
//! Every workflow runs as one transactional unit of work across the backing
//! store.
//!
//! # Architecture
//!
//! Capstan follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`review`]: Pull request lifecycle, reviewer selection, and team rosters
//! - [`transaction`]: The unit-of-work coordination contract shared by all
//!   backends

pub mod review;
pub mod transaction;
