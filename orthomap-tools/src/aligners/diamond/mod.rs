//! DIAMOND aligner implementation

mod command;

use crate::traits::{Aligner, SearchRequest};
use crate::workspace::ScratchWorkspace;
use orthomap_bio::{parse_tabular, write_fasta, SimilarityHit};
use orthomap_core::{OrthomapError, OrthomapResult};
use std::ffi::OsString;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::{debug, info, warn};

/// Binary name looked up on `PATH`
pub const DIAMOND_BINARY: &str = "diamond";

/// DIAMOND aligner integration
#[derive(Debug, Clone)]
pub struct DiamondAligner {
    binary_path: PathBuf,
    preserve_temp: bool,
}

impl DiamondAligner {
    /// Use an explicit binary path
    pub fn new(binary_path: PathBuf) -> OrthomapResult<Self> {
        if !binary_path.exists() {
            return Err(OrthomapError::ToolNotFound(binary_path.display().to_string()));
        }
        Ok(Self {
            binary_path,
            preserve_temp: false,
        })
    }

    /// Resolve `diamond` on `PATH`
    pub fn locate() -> OrthomapResult<Self> {
        let binary_path = which::which(DIAMOND_BINARY)
            .map_err(|_| OrthomapError::ToolNotFound(DIAMOND_BINARY.to_string()))?;
        debug!(path = %binary_path.display(), "located DIAMOND");
        Ok(Self {
            binary_path,
            preserve_temp: false,
        })
    }

    /// Keep every search's scratch directory for inspection
    pub fn with_preserve_temp(mut self, preserve: bool) -> Self {
        self.preserve_temp = preserve;
        self
    }

    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }

    fn run(&self, args: Vec<OsString>, step: &str) -> OrthomapResult<Output> {
        debug!(step, ?args, "running DIAMOND");
        let output = Command::new(&self.binary_path)
            .args(&args)
            .output()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    OrthomapError::ToolNotFound(self.binary_path.display().to_string())
                }
                _ => OrthomapError::Io(e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(OrthomapError::Aligner {
                tool: format!("DIAMOND {}", step),
                status: output.status.code().unwrap_or(-1),
                stderr,
            });
        }
        Ok(output)
    }

    fn search_in(
        &self,
        workspace: &ScratchWorkspace,
        request: &SearchRequest<'_>,
    ) -> OrthomapResult<Vec<SimilarityHit>> {
        let query_fasta = workspace.file("query.fasta");
        let database_fasta = workspace.file("database.fasta");
        let database = workspace.file("database");
        let hits_path = workspace.file("hits.tsv");

        write_fasta(&query_fasta, request.query)?;
        write_fasta(&database_fasta, request.database)?;

        self.run(command::makedb_args(&database_fasta, &database), "makedb")?;
        self.run(
            command::search_args(request.mode, &query_fasta, &database, &hits_path, request.params),
            request.mode.subcommand(),
        )?;

        // DIAMOND may skip creating the file when nothing passed the filters
        if !hits_path.exists() {
            return Ok(Vec::new());
        }
        parse_tabular(BufReader::new(File::open(&hits_path)?))
    }
}

impl Aligner for DiamondAligner {
    fn name(&self) -> &str {
        "DIAMOND"
    }

    fn search(&self, request: &SearchRequest<'_>) -> OrthomapResult<Vec<SimilarityHit>> {
        if request.query.is_empty() || request.database.is_empty() {
            warn!(
                query = request.query.len(),
                database = request.database.len(),
                "empty sequence set, skipping DIAMOND search"
            );
            return Ok(Vec::new());
        }

        let workspace = ScratchWorkspace::new(request.mode.subcommand(), self.preserve_temp)?;
        let result = self.search_in(&workspace, request);
        workspace.finish(result.is_err());

        let hits = result?;
        info!(
            mode = %request.mode,
            queries = request.query.len(),
            hits = hits.len(),
            "DIAMOND search finished"
        );
        Ok(hits)
    }

    fn version(&self) -> OrthomapResult<String> {
        let output = self.run(vec!["version".into()], "version")?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
