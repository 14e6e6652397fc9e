//! Unit tests for the review module.
//!
//! Tests are organised by layer, covering domain validation, reviewer
//! selection, transaction semantics, workflow orchestration, and
//! persistence row mapping.

mod support;
