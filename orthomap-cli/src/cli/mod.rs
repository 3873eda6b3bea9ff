pub mod pipeline;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use orthomap_core::{load_config, Config};
use orthomap_tools::{Aligner, DiamondAligner, SearchParams};
use orthomap_utils::{banner, success, PassthroughSpec};
use std::path::PathBuf;
use tracing::info;

use self::pipeline::{Pipeline, PreparedInputs, RunInputs};

#[derive(Parser, Debug)]
#[command(
    name = "orthomap",
    version,
    about = "Sequence-based table merger with autodetection",
    long_about = "Orthomap joins two annotation tables that share no identifier scheme. \
                  Sequences from both tables are searched against each other with DIAMOND \
                  in both directions, and rows whose sequences are reciprocal best hits are \
                  merged into one output table."
)]
pub struct Cli {
    /// Reference table (its columns can be passed through)
    #[arg(long = "t1", value_name = "FILE")]
    pub table_a: PathBuf,

    /// Query table
    #[arg(long = "t2", value_name = "FILE")]
    pub table_b: PathBuf,

    /// ID column name for table 1 (default: first column)
    #[arg(long = "i1", value_name = "COLUMN")]
    pub id_a: Option<String>,

    /// ID column name for table 2 (default: first column)
    #[arg(long = "i2", value_name = "COLUMN")]
    pub id_b: Option<String>,

    /// Sequence column in table 1
    #[arg(long = "s1", value_name = "COLUMN")]
    pub seq_a: String,

    /// Sequence column in table 2
    #[arg(long = "s2", value_name = "COLUMN")]
    pub seq_b: String,

    /// Minimum identity % [default: 90]
    #[arg(long = "id", value_name = "PCT")]
    pub min_identity: Option<f64>,

    /// Minimum query coverage % [default: 90]
    #[arg(long = "cov", value_name = "PCT")]
    pub min_coverage: Option<f64>,

    /// Maximum e-value [default: 1e-10]
    #[arg(long = "evalue", value_name = "EVALUE")]
    pub max_evalue: Option<f64>,

    /// Aligner threads, 0 = all available [default: 4]
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Columns to transfer from table 1 ("*" for all)
    #[arg(long, value_name = "COLUMNS")]
    pub passthrough: Option<String>,

    /// Output table [default: ortho_results.csv]
    #[arg(long = "out", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output delimiter [default: comma]
    #[arg(long, value_enum, value_name = "DELIMITER")]
    pub out_delimiter: Option<OutputDelimiter>,

    /// TOML configuration file; flags override its values
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// DIAMOND binary (default: `diamond` on PATH)
    #[arg(long, env = "ORTHOMAP_DIAMOND", value_name = "PATH")]
    pub diamond: Option<PathBuf>,

    /// Run the forward and reverse searches concurrently, splitting --threads between them
    #[arg(long)]
    pub parallel_directions: bool,

    /// Keep the aligner scratch directories
    #[arg(long)]
    pub preserve_temp: bool,

    /// Write the execution summary as JSON
    #[arg(long, value_name = "FILE")]
    pub summary_json: Option<PathBuf>,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputDelimiter {
    Comma,
    Tab,
}

impl OutputDelimiter {
    pub fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Tab => '\t',
        }
    }
}

impl Cli {
    /// Defaults, then the config file, then flags
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => Config::default(),
        };

        let search = &mut config.search;
        if let Some(v) = self.min_identity {
            search.min_identity = v;
        }
        if let Some(v) = self.min_coverage {
            search.min_coverage = v;
        }
        if let Some(v) = self.max_evalue {
            search.max_evalue = v;
        }
        if let Some(v) = self.threads {
            search.threads = if v == 0 { num_cpus::get() } else { v };
        }
        if self.parallel_directions {
            search.parallel_directions = true;
        }

        if let Some(path) = &self.diamond {
            config.aligner.binary = Some(path.clone());
        }
        if self.preserve_temp {
            config.aligner.preserve_temp = true;
        }

        if let Some(path) = &self.output {
            config.output.path = path.clone();
        }
        if let Some(delimiter) = self.out_delimiter {
            config.output.delimiter = delimiter.as_char();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn run_inputs(&self) -> RunInputs {
        RunInputs {
            table_a: self.table_a.clone(),
            table_b: self.table_b.clone(),
            id_a: self.id_a.clone(),
            id_b: self.id_b.clone(),
            seq_a: self.seq_a.clone(),
            seq_b: self.seq_b.clone(),
        }
    }

    pub fn passthrough_spec(&self) -> PassthroughSpec {
        self.passthrough
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

fn build_aligner(config: &Config) -> anyhow::Result<DiamondAligner> {
    let aligner = match &config.aligner.binary {
        Some(path) => DiamondAligner::new(path.clone())?,
        None => DiamondAligner::locate()?,
    };
    Ok(aligner.with_preserve_temp(config.aligner.preserve_temp))
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;

    banner("OrthoMap: Sequence-based table merger");

    // Inputs are validated before the aligner is touched
    let prepared = PreparedInputs::load(&cli.run_inputs())?;

    let aligner = build_aligner(&config)?;
    let version = aligner.version()?;
    info!(binary = %aligner.binary_path().display(), %version, "aligner ready");

    let params = SearchParams::from(&config.search);
    let pipeline = Pipeline::new(&aligner, params)
        .with_parallel_directions(config.search.parallel_directions);

    let output = &config.output.path;
    let summary = pipeline.run(
        &prepared,
        &cli.passthrough_spec(),
        output,
        config.output.delimiter as u8,
    )?;

    eprintln!();
    eprintln!("{}", summary.to_table());
    success(&format!("Output: {}", output.display()));

    if let Some(path) = &cli.summary_json {
        let json = serde_json::to_string_pretty(&summary)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write summary {}", path.display()))?;
    }
    Ok(())
}
