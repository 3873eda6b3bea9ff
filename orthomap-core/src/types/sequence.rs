//! Sequence-related types shared across orthomap

use serde::{Deserialize, Serialize};

/// Alphabet of a table's sequence column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SequenceType {
    /// Protein/amino acid sequence
    Protein,
    /// DNA or RNA sequence
    Nucleotide,
}

impl SequenceType {
    pub fn is_nucleotide(&self) -> bool {
        matches!(self, Self::Nucleotide)
    }
}

impl Default for SequenceType {
    fn default() -> Self {
        Self::Protein
    }
}

impl std::fmt::Display for SequenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Protein => write!(f, "Protein"),
            Self::Nucleotide => write!(f, "Nucleotide"),
        }
    }
}
