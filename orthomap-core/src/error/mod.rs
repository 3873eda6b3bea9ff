//! Core error types for orthomap

use thiserror::Error;

/// Main error type for orthomap operations
#[derive(Error, Debug)]
pub enum OrthomapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Column '{column}' not found in {table}")]
    MissingColumn { table: String, column: String },

    #[error("Aligner binary not found: {0}")]
    ToolNotFound(String),

    #[error("{tool} exited with status {status}: {stderr}")]
    Aligner {
        tool: String,
        status: i32,
        stderr: String,
    },

}

/// Result type alias for orthomap operations
pub type OrthomapResult<T> = Result<T, OrthomapError>;

impl OrthomapError {
    /// Process exit code used by the command-line front end
    pub fn exit_code(&self) -> i32 {
        match self {
            OrthomapError::Configuration(_) => 2,
            OrthomapError::Io(_) => 3,
            OrthomapError::Parse(_) | OrthomapError::Csv(_) => 4,
            OrthomapError::InvalidInput(_) | OrthomapError::MissingColumn { .. } => 5,
            OrthomapError::Aligner { .. } | OrthomapError::ToolNotFound(_) => 6,
        }
    }
}
