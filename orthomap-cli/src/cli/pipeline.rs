//! End-to-end run: tables in, merged ortholog table out.
//!
//! Everything that can fail on bad input happens in [`PreparedInputs::load`],
//! before any aligner call. Both directional searches must complete before
//! reciprocity is resolved, and the output is written once at the end.

use anyhow::Context;
use orthomap_bio::{
    classify_sequences, resolve_reciprocal, BestHitIndex, OrthologPair, SequenceRecord,
    SimilarityHit,
};
use orthomap_core::{AlignmentMode, OrthomapResult, SequenceType};
use orthomap_tools::{Aligner, SearchParams, SearchRequest};
use orthomap_utils::{
    create_spinner, info, merge_annotations, step, warning, PassthroughSpec, RunSummary,
    SourceTable,
};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const TOTAL_STEPS: usize = 5;

pub const NO_ORTHOLOGS_MESSAGE: &str =
    "No orthologs found. Check if ID columns and sequence types are correct.";

/// Paths and column choices for one run
#[derive(Debug, Clone)]
pub struct RunInputs {
    pub table_a: PathBuf,
    pub table_b: PathBuf,
    pub id_a: Option<String>,
    pub id_b: Option<String>,
    pub seq_a: String,
    pub seq_b: String,
}

/// Both tables loaded, classified and turned into sequence records
#[derive(Debug)]
pub struct PreparedInputs {
    pub table_a: SourceTable,
    pub id_a: String,
    pub id_b: String,
    pub type_a: SequenceType,
    pub type_b: SequenceType,
    pub records_a: Vec<SequenceRecord>,
    pub records_b: Vec<SequenceRecord>,
}

impl PreparedInputs {
    pub fn load(inputs: &RunInputs) -> anyhow::Result<Self> {
        let table_a = SourceTable::load(&inputs.table_a, "table 1")
            .with_context(|| format!("Failed to read {}", inputs.table_a.display()))?;
        let table_b = SourceTable::load(&inputs.table_b, "table 2")
            .with_context(|| format!("Failed to read {}", inputs.table_b.display()))?;
        Self::from_tables(table_a, table_b, inputs)
    }

    pub fn from_tables(
        table_a: SourceTable,
        table_b: SourceTable,
        inputs: &RunInputs,
    ) -> anyhow::Result<Self> {
        let id_a = table_a.id_column(inputs.id_a.as_deref())?.to_string();
        let id_b = table_b.id_column(inputs.id_b.as_deref())?.to_string();
        let seq_idx_a = table_a.column_index(&inputs.seq_a)?;
        let seq_idx_b = table_b.column_index(&inputs.seq_b)?;
        info(&format!("Mapping via IDs: Table 1 [{}] <-> Table 2 [{}]", id_a, id_b));

        let type_a = classify_sequences(table_a.column_values(seq_idx_a));
        let type_b = classify_sequences(table_b.column_values(seq_idx_b));
        step(
            1,
            TOTAL_STEPS,
            &format!(
                "Autodetected formats -> T1: {}, T2: {}",
                type_a.to_string().to_uppercase(),
                type_b.to_string().to_uppercase()
            ),
        );

        let (records_a, stats_a) = table_a.sequence_records(&id_a, &inputs.seq_a)?;
        let (records_b, stats_b) = table_b.sequence_records(&id_b, &inputs.seq_b)?;
        debug!(?stats_a, ?stats_b, "sequence records");
        step(
            2,
            TOTAL_STEPS,
            &format!(
                "Prepared {} sequences from table 1 and {} from table 2",
                records_a.len(),
                records_b.len()
            ),
        );

        Ok(Self {
            table_a,
            id_a,
            id_b,
            type_a,
            type_b,
            records_a,
            records_b,
        })
    }
}

/// Runs both searches through an [`Aligner`] and merges the result
pub struct Pipeline<'a> {
    aligner: &'a dyn Aligner,
    params: SearchParams,
    parallel_directions: bool,
}

impl<'a> Pipeline<'a> {
    pub fn new(aligner: &'a dyn Aligner, params: SearchParams) -> Self {
        Self {
            aligner,
            params,
            parallel_directions: false,
        }
    }

    pub fn with_parallel_directions(mut self, parallel: bool) -> Self {
        self.parallel_directions = parallel;
        self
    }

    /// Parameters for the forward and reverse searches. Concurrent searches
    /// share the thread budget, the forward one taking the odd thread.
    fn direction_params(&self) -> (SearchParams, SearchParams) {
        if !self.parallel_directions {
            return (self.params.clone(), self.params.clone());
        }
        let threads = self.params.threads.max(1);
        let forward = SearchParams {
            threads: (threads + 1) / 2,
            ..self.params.clone()
        };
        let reverse = SearchParams {
            threads: (threads / 2).max(1),
            ..self.params.clone()
        };
        (forward, reverse)
    }

    /// Forward (table 1 against table 2) and reverse searches, reduced to
    /// reciprocal best hits
    pub fn resolve(&self, inputs: &PreparedInputs) -> anyhow::Result<Vec<OrthologPair>> {
        let (forward_params, reverse_params) = self.direction_params();
        let forward = SearchRequest {
            query: &inputs.records_a,
            database: &inputs.records_b,
            mode: AlignmentMode::for_query(inputs.type_a),
            params: &forward_params,
        };
        let reverse = SearchRequest {
            query: &inputs.records_b,
            database: &inputs.records_a,
            mode: AlignmentMode::for_query(inputs.type_b),
            params: &reverse_params,
        };

        // DIAMOND databases are protein; a nucleotide database side is searched as is
        if inputs.type_b.is_nucleotide() {
            warn!("table 2 is nucleotide but serves as a protein database in the forward search");
        }
        if inputs.type_a.is_nucleotide() {
            warn!("table 1 is nucleotide but serves as a protein database in the reverse search");
        }

        step(3, TOTAL_STEPS, &format!("Forward search ({})...", forward.mode));
        let (forward_hits, reverse_hits) = if self.parallel_directions {
            step(4, TOTAL_STEPS, &format!("Reverse search ({})...", reverse.mode));
            let spinner = create_spinner("Searching both directions");
            let (fwd, rev) = rayon::join(
                || self.aligner.search(&forward),
                || self.aligner.search(&reverse),
            );
            spinner.finish_and_clear();
            (
                fwd.context("Forward search failed")?,
                rev.context("Reverse search failed")?,
            )
        } else {
            let fwd = self
                .search("Searching table 1 against table 2", &forward)
                .context("Forward search failed")?;
            step(4, TOTAL_STEPS, &format!("Reverse search ({})...", reverse.mode));
            let rev = self
                .search("Searching table 2 against table 1", &reverse)
                .context("Reverse search failed")?;
            (fwd, rev)
        };

        step(5, TOTAL_STEPS, "Resolving reciprocal best hits");
        let forward_best = BestHitIndex::from_hits(forward_hits);
        let reverse_best = BestHitIndex::from_hits(reverse_hits);
        debug!(
            forward = forward_best.len(),
            reverse = reverse_best.len(),
            "best hits per direction"
        );
        Ok(resolve_reciprocal(&forward_best, &reverse_best))
    }

    fn search(
        &self,
        message: &str,
        request: &SearchRequest<'_>,
    ) -> OrthomapResult<Vec<SimilarityHit>> {
        let spinner = create_spinner(message);
        let result = self.aligner.search(request);
        spinner.finish_and_clear();
        result
    }

    /// Resolve, merge and write `output`. An empty result still writes the header.
    pub fn run(
        &self,
        inputs: &PreparedInputs,
        passthrough: &PassthroughSpec,
        output: &Path,
        delimiter: u8,
    ) -> anyhow::Result<RunSummary> {
        let pairs = self.resolve(inputs)?;

        let merged = merge_annotations(
            &pairs,
            &inputs.table_a,
            &inputs.id_a,
            &inputs.id_b,
            passthrough,
        )?;
        if !merged.dropped_columns.is_empty() {
            warning(&format!(
                "Passthrough columns not in table 1: {}",
                merged.dropped_columns.join(", ")
            ));
        }
        if merged.is_empty() {
            warning(NO_ORTHOLOGS_MESSAGE);
        }

        merged
            .write(output, delimiter)
            .with_context(|| format!("Failed to write {}", output.display()))?;

        Ok(RunSummary::new(
            &pairs,
            inputs.type_a,
            inputs.type_b,
            output.to_path_buf(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orthomap_core::OrthomapError;
    use orthomap_test::hit;
    use orthomap_tools::MockAligner;
    use pretty_assertions::assert_eq;

    fn table(text: &str, label: &str) -> SourceTable {
        SourceTable::from_reader(text.as_bytes(), b',', label).unwrap()
    }

    fn inputs(id_a: Option<&str>) -> RunInputs {
        RunInputs {
            table_a: PathBuf::from("t1.csv"),
            table_b: PathBuf::from("t2.csv"),
            id_a: id_a.map(str::to_string),
            id_b: None,
            seq_a: "seq".to_string(),
            seq_b: "seq".to_string(),
        }
    }

    fn prepared() -> PreparedInputs {
        PreparedInputs::from_tables(
            table("id,seq,name\nP1,MKTAYIAK,kinase\nP2,MSSHHWLL,ligase\n", "table 1"),
            table("gene,seq\nG1,MKTAYIAK\nG2,MSSHHWLL\n", "table 2"),
            &inputs(None),
        )
        .unwrap()
    }

    fn reciprocal_hits() -> Vec<SimilarityHit> {
        vec![
            hit("P1", "G1", 95.0),
            hit("G1", "P1", 95.0),
            hit("P2", "G2", 80.0),
            hit("G2", "P1", 60.0),
        ]
    }

    #[test]
    fn test_prepare_defaults_and_classifies() {
        let prepared = prepared();
        assert_eq!(prepared.id_a, "id");
        assert_eq!(prepared.id_b, "gene");
        assert_eq!(prepared.type_a, SequenceType::Protein);
        assert_eq!(prepared.records_a.len(), 2);
        assert_eq!(prepared.records_b.len(), 2);
    }

    #[test]
    fn test_prepare_missing_sequence_column() {
        let err = PreparedInputs::from_tables(
            table("id,protein\nP1,MKT\n", "table 1"),
            table("gene,seq\nG1,MKT\n", "table 2"),
            &inputs(None),
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<OrthomapError>(),
            Some(OrthomapError::MissingColumn { column, .. }) if column == "seq"
        ));
    }

    #[test]
    fn test_prepare_unknown_id_override() {
        let err = PreparedInputs::from_tables(
            table("id,seq\nP1,MKT\n", "table 1"),
            table("gene,seq\nG1,MKT\n", "table 2"),
            &inputs(Some("accession")),
        )
        .unwrap_err();
        assert_eq!(err.downcast_ref::<OrthomapError>().map(|e| e.exit_code()), Some(5));
    }

    #[test]
    fn test_resolve_keeps_only_reciprocal_pairs() {
        let aligner = MockAligner::with_hits(reciprocal_hits());
        let pairs = Pipeline::new(&aligner, SearchParams::default())
            .resolve(&prepared())
            .unwrap();

        assert_eq!(pairs.len(), 1);
        assert_eq!((pairs[0].a_id.as_str(), pairs[0].b_id.as_str()), ("P1", "G1"));
        assert_eq!(aligner.calls(), vec![AlignmentMode::Blastp, AlignmentMode::Blastp]);
    }

    #[test]
    fn test_parallel_directions_match_sequential() {
        let aligner = MockAligner::with_hits(reciprocal_hits());
        let sequential = Pipeline::new(&aligner, SearchParams::default())
            .resolve(&prepared())
            .unwrap();
        let parallel = Pipeline::new(&aligner, SearchParams::default())
            .with_parallel_directions(true)
            .resolve(&prepared())
            .unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_parallel_directions_split_threads() {
        let params = SearchParams {
            threads: 5,
            ..SearchParams::default()
        };

        let aligner = MockAligner::with_hits(reciprocal_hits());
        Pipeline::new(&aligner, params.clone())
            .resolve(&prepared())
            .unwrap();
        assert_eq!(aligner.thread_counts(), vec![5, 5]);

        let aligner = MockAligner::with_hits(reciprocal_hits());
        Pipeline::new(&aligner, params)
            .with_parallel_directions(true)
            .resolve(&prepared())
            .unwrap();
        let mut counts = aligner.thread_counts();
        counts.sort_unstable();
        assert_eq!(counts, vec![2, 3]);
    }

    #[test]
    fn test_single_thread_is_not_split_below_one() {
        let params = SearchParams {
            threads: 1,
            ..SearchParams::default()
        };
        let aligner = MockAligner::with_hits(reciprocal_hits());
        Pipeline::new(&aligner, params)
            .with_parallel_directions(true)
            .resolve(&prepared())
            .unwrap();
        assert_eq!(aligner.thread_counts(), vec![1, 1]);
    }

    #[test]
    fn test_nucleotide_query_uses_blastx() {
        let prepared = PreparedInputs::from_tables(
            table("id,seq\nN1,ATGCATGCATGC\n", "table 1"),
            table("gene,seq\nG1,MKTAYIAK\n", "table 2"),
            &inputs(None),
        )
        .unwrap();
        let aligner = MockAligner::new();
        Pipeline::new(&aligner, SearchParams::default())
            .resolve(&prepared)
            .unwrap();
        assert_eq!(aligner.calls(), vec![AlignmentMode::Blastx, AlignmentMode::Blastp]);
    }

    #[test]
    fn test_run_writes_merged_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.csv");
        let aligner = MockAligner::with_hits(reciprocal_hits());

        let summary = Pipeline::new(&aligner, SearchParams::default())
            .run(&prepared(), &PassthroughSpec::All, &output, b',')
            .unwrap();

        assert_eq!(summary.orthologs, 1);
        assert_eq!(summary.mean_identity, Some(100.0));
        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            text,
            "id,gene,identity_pct,evalue,bitscore,len_a,len_b,cov_a_pct,len_ratio,seq,name\n\
             P1,G1,100.0,1e-5,95.0,8,8,100.0,1.0,MKTAYIAK,kinase\n"
        );
    }

    #[test]
    fn test_run_without_orthologs_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.tsv");
        let aligner = MockAligner::with_hits(vec![hit("P1", "G1", 95.0), hit("G1", "P2", 95.0)]);

        let summary = Pipeline::new(&aligner, SearchParams::default())
            .run(&prepared(), &PassthroughSpec::None, &output, b'\t')
            .unwrap();

        assert_eq!(summary.orthologs, 0);
        assert_eq!(summary.mean_identity, None);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "id\tgene\tidentity_pct\tevalue\tbitscore\tlen_a\tlen_b\tcov_a_pct\tlen_ratio\n"
        );
    }

    #[test]
    fn test_aligner_failure_aborts_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.csv");
        let aligner = MockAligner::failing("segfault");

        let err = Pipeline::new(&aligner, SearchParams::default())
            .run(&prepared(), &PassthroughSpec::None, &output, b',')
            .unwrap_err();

        assert_eq!(err.downcast_ref::<OrthomapError>().map(|e| e.exit_code()), Some(6));
        assert!(!output.exists());
        assert_eq!(aligner.calls().len(), 1);
    }
}
