//! Shared types used across orthomap crates

pub mod aligner;
pub mod sequence;

pub use aligner::AlignmentMode;
pub use sequence::SequenceType;
