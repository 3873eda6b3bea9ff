/// Traits for alignment tools
use orthomap_bio::{SequenceRecord, SimilarityHit};
use orthomap_core::{AlignmentMode, OrthomapResult, SearchConfig};

/// Targets reported per query; each direction only needs its best hit
pub const MAX_TARGET_SEQS: usize = 1;

/// Hit filters and resources forwarded to the aligner
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub min_identity: f64,
    pub min_coverage: f64,
    pub max_evalue: f64,
    pub threads: usize,
}

impl From<&SearchConfig> for SearchParams {
    fn from(config: &SearchConfig) -> Self {
        Self {
            min_identity: config.min_identity,
            min_coverage: config.min_coverage,
            max_evalue: config.max_evalue,
            threads: config.threads,
        }
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::from(&SearchConfig::default())
    }
}

/// One search direction: `query` sequences against a `database` built from
/// the other table
#[derive(Debug, Clone, Copy)]
pub struct SearchRequest<'a> {
    pub query: &'a [SequenceRecord],
    pub database: &'a [SequenceRecord],
    pub mode: AlignmentMode,
    pub params: &'a SearchParams,
}

/// Trait for alignment tools
pub trait Aligner: Send + Sync {
    /// Display name used in logs and errors
    fn name(&self) -> &str;

    /// Run one complete search. Any failure of the tool is an error; partial
    /// output is never returned.
    fn search(&self, request: &SearchRequest<'_>) -> OrthomapResult<Vec<SimilarityHit>>;

    /// Get tool version
    fn version(&self) -> OrthomapResult<String>;
}
