//! Core utilities and types shared across all orthomap crates

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, save_config, AlignerConfig, Config, OutputConfig, SearchConfig};
pub use error::{OrthomapError, OrthomapResult};
pub use types::{AlignmentMode, SequenceType};
