use orthomap_bio::{OrthologPair, SimilarityHit};
use orthomap_core::SequenceType;
use orthomap_utils::{merge_annotations, PassthroughSpec, RecordStats, RunSummary, SourceTable};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn pair(a: &str, b: &str, identity: f64, len_b: u64) -> OrthologPair {
    OrthologPair::from_forward_hit(&SimilarityHit {
        query_id: a.to_string(),
        subject_id: b.to_string(),
        identity_pct: identity,
        align_len: 100,
        query_len: 100,
        subject_len: len_b,
        evalue: 0.0,
        bitscore: 180.5,
        query_cov_pct: 98.5,
    })
}

#[test]
fn test_semicolon_table_to_tsv_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("catalog.txt");
    fs::write(
        &input,
        "acc;sequence;evalue;product\n\
         A1;MKTAYIAKQR;0.5;kinase\n\
         A2;;0.1;orphan\n\
         A1;MSSHHWLL;0.9;duplicate\n\
         A3;MSSHHWLLQQ;0.2;ligase\n",
    )
    .unwrap();

    let table = SourceTable::load(&input, "table 1").unwrap();
    assert_eq!(table.headers, vec!["acc", "sequence", "evalue", "product"]);
    assert_eq!(table.len(), 4);

    let id = table.id_column(None).unwrap().to_string();
    let (records, stats) = table.sequence_records(&id, "sequence").unwrap();
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["A1", "A3"]);
    assert_eq!(
        stats,
        RecordStats {
            emitted: 2,
            missing_sequence: 1,
            missing_id: 0,
            duplicate_ids: 1,
        }
    );

    let pairs = vec![pair("A1", "B7", 97.5, 100), pair("A3", "B2", 91.0, 0)];
    let merged = merge_annotations(&pairs, &table, &id, "acc", &PassthroughSpec::All).unwrap();
    assert_eq!(
        merged.headers,
        vec![
            "acc", "acc_t2", "identity_pct", "evalue", "bitscore", "len_a", "len_b",
            "cov_a_pct", "len_ratio", "sequence", "evalue_t1", "product",
        ]
    );

    let output = dir.path().join("merged.tsv");
    merged.write(&output, b'\t').unwrap();
    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "A1\tB7\t97.5\t0.0\t180.5\t100\t100\t98.5\t1.0\tMKTAYIAKQR\t0.5\tkinase");
    assert_eq!(lines[2], "A3\tB2\t91.0\t0.0\t180.5\t100\t0\t98.5\tNA\tMSSHHWLLQQ\t0.2\tligase");

    let summary = RunSummary::new(&pairs, SequenceType::Protein, SequenceType::Nucleotide, output);
    assert_eq!(summary.orthologs, 2);
    assert_eq!(summary.undefined_ratios, 1);
    assert_eq!(summary.mean_identity, Some(94.25));
    let rendered = summary.to_table().to_string();
    assert!(rendered.contains("94.25%"));
    assert!(rendered.contains("NUCLEOTIDE"));
}
