pub mod aligner;

pub use aligner::{Aligner, SearchParams, SearchRequest, MAX_TARGET_SEQS};
