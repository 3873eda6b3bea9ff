//! Aligner type definitions

use crate::types::SequenceType;
use serde::{Deserialize, Serialize};

/// Search mode handed to the external aligner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlignmentMode {
    /// Protein query against a protein database
    Blastp,
    /// Translated nucleotide query against a protein database
    Blastx,
}

impl AlignmentMode {
    /// Mode for a query set of the given alphabet
    pub fn for_query(query: SequenceType) -> Self {
        match query {
            SequenceType::Protein => Self::Blastp,
            SequenceType::Nucleotide => Self::Blastx,
        }
    }

    /// Aligner subcommand name
    pub fn subcommand(&self) -> &'static str {
        match self {
            Self::Blastp => "blastp",
            Self::Blastx => "blastx",
        }
    }
}

impl std::fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.subcommand())
    }
}
