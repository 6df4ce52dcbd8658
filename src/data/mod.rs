//! Data module for portfolio-check
//!
//! Contains the embedded manifest of expected portfolio files.

pub mod manifest;
