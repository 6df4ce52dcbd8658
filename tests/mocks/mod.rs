//! Mock portfolio projects for testing.
//!
//! Builds project trees in temporary directories so checks run against real
//! files without touching the working directory.

pub mod project;

pub use project::*;
