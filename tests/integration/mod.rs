//! Integration tests for portfolio-check.
//!
//! These tests run the checks against temporary project trees.

pub mod output_tests;
