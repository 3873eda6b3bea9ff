/// Scratch directory for the files one aligner invocation needs
use orthomap_core::OrthomapResult;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, warn};

/// Environment variable that keeps the scratch directory of a failed search
pub const PRESERVE_ON_FAILURE_ENV: &str = "ORTHOMAP_PRESERVE_ON_FAILURE";

/// Owns a temporary directory that is deleted on drop unless preserved
#[derive(Debug)]
pub struct ScratchWorkspace {
    dir: Option<TempDir>,
    preserve_always: bool,
    preserve_on_failure: bool,
}

impl ScratchWorkspace {
    pub fn new(label: &str, preserve_always: bool) -> OrthomapResult<Self> {
        let dir = tempfile::Builder::new()
            .prefix(&format!("orthomap-{}-", label))
            .tempdir()?;
        debug!(path = %dir.path().display(), "created scratch workspace");

        Ok(Self {
            dir: Some(dir),
            preserve_always,
            preserve_on_failure: std::env::var_os(PRESERVE_ON_FAILURE_ENV).is_some(),
        })
    }

    pub fn path(&self) -> &Path {
        self.dir
            .as_ref()
            .map(TempDir::path)
            .unwrap_or_else(|| Path::new(""))
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }

    /// Finish the workspace after the search outcome is known
    pub fn finish(mut self, failed: bool) -> Option<PathBuf> {
        let keep = self.preserve_always || (failed && self.preserve_on_failure);
        let dir = self.dir.take()?;
        if keep {
            let path = dir.keep();
            warn!(path = %path.display(), "preserved aligner scratch directory");
            Some(path)
        } else {
            // Dropping removes the directory
            None
        }
    }
}
