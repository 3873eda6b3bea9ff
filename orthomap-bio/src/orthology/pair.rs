use crate::hits::SimilarityHit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Render a float metric: plain decimals for ordinary magnitudes with at
/// least one fractional digit (`100.0`), scientific notation for tiny or huge
/// values
pub fn format_metric(value: f64) -> String {
    let magnitude = value.abs();
    if !value.is_finite() {
        value.to_string()
    } else if value == 0.0 || (1e-4..1e15).contains(&magnitude) {
        if value.fract() == 0.0 {
            format!("{:.1}", value)
        } else {
            value.to_string()
        }
    } else {
        format!("{:e}", value)
    }
}

/// `len_a / len_b`, or undefined when `len_b` is zero
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LengthRatio {
    Defined(f64),
    Undefined,
}

impl LengthRatio {
    /// Marker written in place of an undefined ratio
    pub const UNDEFINED_MARKER: &'static str = "NA";

    pub fn new(len_a: u64, len_b: u64) -> Self {
        if len_b == 0 {
            Self::Undefined
        } else {
            Self::Defined(len_a as f64 / len_b as f64)
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Defined(v) => Some(*v),
            Self::Undefined => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Defined(_))
    }
}

impl fmt::Display for LengthRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defined(v) => f.write_str(&format_metric(*v)),
            Self::Undefined => f.write_str(Self::UNDEFINED_MARKER),
        }
    }
}

/// Quality metrics of a pair, taken from the forward (A to B) hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairMetrics {
    pub identity_pct: f64,
    pub evalue: f64,
    pub bitscore: f64,
    pub len_a: u64,
    pub len_b: u64,
    pub cov_a_pct: f64,
    pub len_ratio: LengthRatio,
}

impl PairMetrics {
    /// Canonical output column names, in order
    pub const COLUMNS: [&'static str; 7] = [
        "identity_pct",
        "evalue",
        "bitscore",
        "len_a",
        "len_b",
        "cov_a_pct",
        "len_ratio",
    ];

    pub fn from_forward_hit(hit: &SimilarityHit) -> Self {
        Self {
            identity_pct: hit.identity_pct,
            evalue: hit.evalue,
            bitscore: hit.bitscore,
            len_a: hit.query_len,
            len_b: hit.subject_len,
            cov_a_pct: hit.query_cov_pct,
            len_ratio: LengthRatio::new(hit.query_len, hit.subject_len),
        }
    }

    /// Values rendered in [`PairMetrics::COLUMNS`] order
    pub fn to_fields(&self) -> [String; 7] {
        [
            format_metric(self.identity_pct),
            format_metric(self.evalue),
            format_metric(self.bitscore),
            self.len_a.to_string(),
            self.len_b.to_string(),
            format_metric(self.cov_a_pct),
            self.len_ratio.to_string(),
        ]
    }
}

/// Two ids that are each other's best hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrthologPair {
    pub a_id: String,
    pub b_id: String,
    pub metrics: PairMetrics,
}

impl OrthologPair {
    pub fn from_forward_hit(hit: &SimilarityHit) -> Self {
        Self {
            a_id: hit.query_id.clone(),
            b_id: hit.subject_id.clone(),
            metrics: PairMetrics::from_forward_hit(hit),
        }
    }
}
