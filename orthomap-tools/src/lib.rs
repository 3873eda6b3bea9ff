//! External aligner integration
//!
//! The orthology core never touches the filesystem for a search: it hands an
//! in-memory [`SearchRequest`] to an [`Aligner`] and gets parsed hits back.
//! Implementations own their scratch files and remove them on every exit path.

pub mod aligners;
pub mod testing;
pub mod traits;
pub mod workspace;

// Re-exports for convenience
pub use aligners::DiamondAligner;
pub use testing::MockAligner;
pub use traits::{Aligner, SearchParams, SearchRequest, MAX_TARGET_SEQS};
pub use workspace::ScratchWorkspace;
