//! Test utilities for the orthomap workspace
//!
//! Isolated on-disk environments, table and hit fixtures, and a stand-in
//! `diamond` executable for end-to-end runs.

pub mod environment;
pub mod fake_aligner;
pub mod fixtures;

// Re-export commonly used items
pub use environment::TestEnvironment;
pub use fake_aligner::FakeDiamond;
pub use fixtures::{delimited, hit, hits_to_tabular};

pub use anyhow::{Context, Result};
pub use tempfile;
