use orthomap_bio::{SequenceRecord, SimilarityHit};
use orthomap_core::{AlignmentMode, OrthomapError, SearchConfig};
use orthomap_tools::{Aligner, MockAligner, SearchParams, SearchRequest};

fn hit(query: &str, subject: &str) -> SimilarityHit {
    SimilarityHit {
        query_id: query.to_string(),
        subject_id: subject.to_string(),
        identity_pct: 99.0,
        align_len: 8,
        query_len: 8,
        subject_len: 8,
        evalue: 1e-5,
        bitscore: 95.0,
        query_cov_pct: 100.0,
    }
}

#[test]
fn test_mock_answers_each_direction_separately() {
    let aligner = MockAligner::with_hits(vec![hit("P1", "G1"), hit("G1", "P1"), hit("P9", "G1")]);
    let table_a = vec![SequenceRecord::new("P1", "MKTAYIAK")];
    let table_b = vec![SequenceRecord::new("G1", "MKTAYIAK")];
    let params = SearchParams::default();

    let forward = aligner
        .search(&SearchRequest {
            query: &table_a,
            database: &table_b,
            mode: AlignmentMode::Blastp,
            params: &params,
        })
        .unwrap();
    let reverse = aligner
        .search(&SearchRequest {
            query: &table_b,
            database: &table_a,
            mode: AlignmentMode::Blastx,
            params: &params,
        })
        .unwrap();

    assert_eq!(forward, vec![hit("P1", "G1")]);
    assert_eq!(reverse, vec![hit("G1", "P1")]);
    assert_eq!(aligner.calls(), vec![AlignmentMode::Blastp, AlignmentMode::Blastx]);
}

#[test]
fn test_failing_mock_reports_aligner_error() {
    let aligner = MockAligner::failing("database is corrupt");
    let params = SearchParams::default();
    let records = vec![SequenceRecord::new("P1", "MKT")];

    let err = aligner
        .search(&SearchRequest {
            query: &records,
            database: &records,
            mode: AlignmentMode::Blastp,
            params: &params,
        })
        .unwrap_err();
    assert!(matches!(err, OrthomapError::Aligner { status: 1, .. }));
}

#[test]
fn test_search_params_from_config() {
    let mut config = SearchConfig::default();
    config.min_identity = 35.0;
    config.threads = 12;

    let params = SearchParams::from(&config);
    assert_eq!(params.min_identity, 35.0);
    assert_eq!(params.min_coverage, 90.0);
    assert_eq!(params.max_evalue, 1e-10);
    assert_eq!(params.threads, 12);
}
