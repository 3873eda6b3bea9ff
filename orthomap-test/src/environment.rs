//! Test environment management

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated directory removed when the environment is dropped
pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::with_prefix("orthomap-test")
            .context("Failed to create temporary directory")?;
        Ok(Self { temp_dir })
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `name` inside the environment
    pub fn create_input_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.root().join(name);
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Path for a file the code under test is expected to create
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }
}
