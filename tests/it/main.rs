//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices,
//! reducing linking overhead to a single link step.
//!
//! Structure:
//! - helpers: Deterministic board builders and gesture shorthands
//! - integration: Multi-step gesture workflows
//! - unit: Single-component unit tests

mod integration;
