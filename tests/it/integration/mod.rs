//! Integration tests for Pillboard.
//!
//! These tests drive the board through complete pointer gestures, the way the
//! window front-end does, and check the resulting pill list.

mod gesture_workflow_tests;
mod hit_testing_tests;
