//! Configuration types for orthomap

use crate::OrthomapError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub aligner: AlignerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Hit filters and resources forwarded to the external aligner
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Minimum percent identity of a reported hit
    #[serde(default = "default_min_identity")]
    pub min_identity: f64,
    /// Minimum percent of the query covered by the alignment
    #[serde(default = "default_min_coverage")]
    pub min_coverage: f64,
    #[serde(default = "default_max_evalue")]
    pub max_evalue: f64,
    #[serde(default = "default_threads")]
    pub threads: usize,
    /// Run the forward and reverse searches concurrently
    #[serde(default)]
    pub parallel_directions: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AlignerConfig {
    /// Explicit path to the aligner binary; resolved on PATH when absent
    #[serde(default)]
    pub binary: Option<PathBuf>,
    /// Keep the scratch directory of every search, not only failed ones
    #[serde(default)]
    pub preserve_temp: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

// Default value functions
fn default_min_identity() -> f64 { 90.0 }
fn default_min_coverage() -> f64 { 90.0 }
fn default_max_evalue() -> f64 { 1e-10 }
fn default_threads() -> usize { 4 }
fn default_output_path() -> PathBuf { PathBuf::from("ortho_results.csv") }
fn default_delimiter() -> char { ',' }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_identity: default_min_identity(),
            min_coverage: default_min_coverage(),
            max_evalue: default_max_evalue(),
            threads: default_threads(),
            parallel_directions: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            delimiter: default_delimiter(),
        }
    }
}

impl Config {
    /// Reject settings the aligner would refuse or silently misinterpret
    pub fn validate(&self) -> Result<(), OrthomapError> {
        let search = &self.search;
        if !(0.0..=100.0).contains(&search.min_identity) {
            return Err(OrthomapError::Configuration(format!(
                "min_identity must be within 0-100, got {}",
                search.min_identity
            )));
        }
        if !(0.0..=100.0).contains(&search.min_coverage) {
            return Err(OrthomapError::Configuration(format!(
                "min_coverage must be within 0-100, got {}",
                search.min_coverage
            )));
        }
        if !(search.max_evalue >= 0.0) {
            return Err(OrthomapError::Configuration(format!(
                "max_evalue must be non-negative, got {}",
                search.max_evalue
            )));
        }
        if search.threads == 0 {
            return Err(OrthomapError::Configuration(
                "threads must be at least 1".to_string(),
            ));
        }
        if !self.output.delimiter.is_ascii() {
            return Err(OrthomapError::Configuration(format!(
                "output delimiter must be a single ASCII character, got '{}'",
                self.output.delimiter
            )));
        }
        Ok(())
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, OrthomapError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| OrthomapError::Configuration(format!("Failed to parse config: {}", e)))?;
    config.validate()?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), OrthomapError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| OrthomapError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
