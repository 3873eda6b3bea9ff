//! Similarity hits parsed from the aligner's tabular output

use orthomap_core::OrthomapError;
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use std::str::FromStr;

/// Output fields requested from the aligner, in column order
pub const TABULAR_FIELDS: [&str; 9] = [
    "qseqid", "sseqid", "pident", "length", "qlen", "slen", "evalue", "bitscore", "qcovhsp",
];

/// One line of search output for a single direction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityHit {
    pub query_id: String,
    pub subject_id: String,
    pub identity_pct: f64,
    pub align_len: u64,
    pub query_len: u64,
    pub subject_len: u64,
    pub evalue: f64,
    pub bitscore: f64,
    pub query_cov_pct: f64,
}

fn field<T: FromStr>(parts: &[&str], index: usize) -> Result<T, OrthomapError> {
    parts[index].trim().parse::<T>().map_err(|_| {
        OrthomapError::Parse(format!(
            "invalid {} value '{}'",
            TABULAR_FIELDS[index], parts[index]
        ))
    })
}

impl FromStr for SimilarityHit {
    type Err = OrthomapError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.trim_end_matches(['\r', '\n']).split('\t').collect();
        if parts.len() != TABULAR_FIELDS.len() {
            return Err(OrthomapError::Parse(format!(
                "expected {} tab-separated columns, found {}",
                TABULAR_FIELDS.len(),
                parts.len()
            )));
        }

        let bitscore: f64 = field(&parts, 7)?;
        if !bitscore.is_finite() {
            return Err(OrthomapError::Parse(format!(
                "non-finite bitscore '{}'",
                parts[7]
            )));
        }

        Ok(Self {
            query_id: parts[0].to_string(),
            subject_id: parts[1].to_string(),
            identity_pct: field(&parts, 2)?,
            align_len: field(&parts, 3)?,
            query_len: field(&parts, 4)?,
            subject_len: field(&parts, 5)?,
            evalue: field(&parts, 6)?,
            bitscore,
            query_cov_pct: field(&parts, 8)?,
        })
    }
}

/// Parse a whole headerless result table. Blank and `#` lines are skipped;
/// any other malformed line fails the parse with its line number.
pub fn parse_tabular<R: BufRead>(reader: R) -> Result<Vec<SimilarityHit>, OrthomapError> {
    let mut hits = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let hit = line.parse::<SimilarityHit>().map_err(|e| match e {
            OrthomapError::Parse(msg) => OrthomapError::Parse(format!("line {}: {}", index + 1, msg)),
            other => other,
        })?;
        hits.push(hit);
    }
    Ok(hits)
}
