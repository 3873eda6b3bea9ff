//! Sequence handling and orthology resolution for orthomap

pub mod formats;
pub mod hits;
pub mod orthology;
pub mod sequence;

// Re-export commonly used types
pub use formats::fasta::{write_fasta, write_fasta_to_writer};
pub use hits::{parse_tabular, SimilarityHit, TABULAR_FIELDS};
pub use orthology::{resolve_reciprocal, BestHitIndex, LengthRatio, OrthologPair, PairMetrics};
pub use sequence::{classify_sequences, SequenceRecord, SequenceType};
