//! Delimited source tables

mod sniff;

pub use sniff::{sniff_delimiter, CANDIDATE_DELIMITERS};

use orthomap_bio::SequenceRecord;
use orthomap_core::{OrthomapError, OrthomapResult};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// Lines read to detect the delimiter
const SNIFF_LINES: usize = 5;

/// A fully materialized table with a header row
#[derive(Debug, Clone, PartialEq)]
pub struct SourceTable {
    /// Label used in messages, e.g. `table 1`
    pub label: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Outcome of turning rows into sequence records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStats {
    pub emitted: usize,
    pub missing_sequence: usize,
    pub missing_id: usize,
    pub duplicate_ids: usize,
}

impl SourceTable {
    /// Load a table, detecting its delimiter from the first lines
    pub fn load<P: AsRef<Path>>(path: P, label: &str) -> OrthomapResult<Self> {
        let path = path.as_ref();
        let mut sample = String::new();
        {
            let reader = BufReader::new(File::open(path)?);
            for line in reader.lines().take(SNIFF_LINES) {
                sample.push_str(&line?);
                sample.push('\n');
            }
        }
        let delimiter = sniff_delimiter(&sample);
        debug!(path = %path.display(), delimiter = %(delimiter as char).escape_default(), "detected delimiter");

        let table = Self::from_reader(File::open(path)?, delimiter, label)?;
        if table.headers.is_empty() {
            return Err(OrthomapError::InvalidInput(format!(
                "{} ({}) has no header row",
                label,
                path.display()
            )));
        }
        Ok(table)
    }

    pub fn from_reader<R: std::io::Read>(reader: R, delimiter: u8, label: &str) -> OrthomapResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in csv_reader.records() {
            rows.push(record?.iter().map(str::to_string).collect());
        }

        Ok(Self {
            label: label.to_string(),
            headers,
            rows,
        })
    }

    pub fn column_index(&self, name: &str) -> OrthomapResult<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| OrthomapError::MissingColumn {
                table: self.label.clone(),
                column: name.to_string(),
            })
    }

    /// Identifier column: the override when given, the first column otherwise
    pub fn id_column<'a>(&'a self, override_name: Option<&'a str>) -> OrthomapResult<&'a str> {
        match override_name {
            Some(name) => {
                self.column_index(name)?;
                Ok(name)
            }
            None => self
                .headers
                .first()
                .map(String::as_str)
                .ok_or_else(|| OrthomapError::InvalidInput(format!("{} has no columns", self.label))),
        }
    }

    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(String::as_str).unwrap_or(""))
    }

    /// Build sequence records from two columns.
    ///
    /// Rows with an empty sequence or an empty id are skipped. A repeated id
    /// is kept once (first row wins). Ids containing whitespace are rejected.
    pub fn sequence_records(
        &self,
        id_column: &str,
        sequence_column: &str,
    ) -> OrthomapResult<(Vec<SequenceRecord>, RecordStats)> {
        let id_idx = self.column_index(id_column)?;
        let seq_idx = self.column_index(sequence_column)?;

        let mut stats = RecordStats::default();
        let mut seen = HashSet::new();
        let mut records = Vec::new();

        for (line, row) in self.rows.iter().enumerate() {
            let sequence = row.get(seq_idx).map(String::as_str).unwrap_or("");
            if sequence.is_empty() {
                stats.missing_sequence += 1;
                continue;
            }
            let id = row.get(id_idx).map(String::as_str).unwrap_or("");
            if id.is_empty() {
                stats.missing_id += 1;
                continue;
            }
            if id.chars().any(char::is_whitespace) {
                return Err(OrthomapError::InvalidInput(format!(
                    "{} row {}: id '{}' contains whitespace",
                    self.label,
                    line + 1,
                    id
                )));
            }
            if !seen.insert(id) {
                stats.duplicate_ids += 1;
                continue;
            }
            records.push(SequenceRecord::new(id, sequence));
        }
        stats.emitted = records.len();

        if stats.missing_id > 0 {
            warn!(table = %self.label, rows = stats.missing_id, "skipped rows without an id");
        }
        if stats.duplicate_ids > 0 {
            warn!(table = %self.label, rows = stats.duplicate_ids, "skipped rows with a repeated id");
        }
        debug!(table = %self.label, ?stats, "built sequence records");
        Ok((records, stats))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
