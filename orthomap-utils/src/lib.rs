//! Shared utilities for orthomap
//!
//! Source table loading, the annotation merge that turns ortholog pairs into
//! output rows, and console output helpers.

pub mod display;
pub mod merge;
pub mod report;
pub mod table;

// Re-export commonly used types
pub use display::{
    banner, create_spinner, create_standard_table, format_number, header_cell, info,
    step, success, warning,
};
pub use merge::{merge_annotations, MergedTable, PassthroughSpec, ResolvedPassthrough};
pub use report::RunSummary;
pub use table::{sniff_delimiter, RecordStats, SourceTable};
