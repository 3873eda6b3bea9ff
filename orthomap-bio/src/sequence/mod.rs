//! Sequence records and alphabet detection

mod classify;

pub use classify::{
    classify_sequences, NUCLEOTIDE_ALPHABET, NUCLEOTIDE_THRESHOLD, SAMPLE_SIZE,
};
pub use orthomap_core::SequenceType;

use serde::{Deserialize, Serialize};

/// One table row reduced to its identifier and raw sequence text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceRecord {
    pub id: String,
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.into(),
        }
    }

    /// FASTA header line for this record
    pub fn header(&self) -> String {
        format!(">{}", self.id)
    }
}
