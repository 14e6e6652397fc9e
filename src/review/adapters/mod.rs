//! Persistence adapters for the review module.
//!
//! Concrete implementations of the [`UserDirectory`] and
//! [`PullRequestStore`] ports, following hexagonal architecture: adapters
//! own all infrastructure concerns while the domain stays pure.
//!
//! # Available Adapters
//!
//! - [`memory`]: session-staged in-memory storage for unit testing
//! - [`postgres`]: production `PostgreSQL` persistence using Diesel ORM
//!
//! [`UserDirectory`]: crate::review::ports::UserDirectory
//! [`PullRequestStore`]: crate::review::ports::PullRequestStore

pub mod memory;
pub mod postgres;
