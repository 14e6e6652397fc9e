//! Step definitions for pull request review workflow scenarios.

pub mod world;

mod then;
