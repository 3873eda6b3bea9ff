//! Test fixtures and data generators

use orthomap_bio::SimilarityHit;

/// Hit with full-length, full-identity alignment of 8 residues
pub fn hit(query: &str, subject: &str, bitscore: f64) -> SimilarityHit {
    SimilarityHit {
        query_id: query.to_string(),
        subject_id: subject.to_string(),
        identity_pct: 100.0,
        align_len: 8,
        query_len: 8,
        subject_len: 8,
        evalue: 1e-5,
        bitscore,
        query_cov_pct: 100.0,
    }
}

/// Render hits the way the aligner writes them
pub fn hits_to_tabular(hits: &[SimilarityHit]) -> String {
    hits.iter()
        .map(|h| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{:e}\t{}\t{}\n",
                h.query_id,
                h.subject_id,
                h.identity_pct,
                h.align_len,
                h.query_len,
                h.subject_len,
                h.evalue,
                h.bitscore,
                h.query_cov_pct
            )
        })
        .collect()
}

/// Delimited text with a header row
pub fn delimited(delimiter: char, headers: &[&str], rows: &[&[&str]]) -> String {
    let sep = delimiter.to_string();
    let mut text = headers.join(&sep);
    text.push('\n');
    for row in rows {
        text.push_str(&row.join(&sep));
        text.push('\n');
    }
    text
}
