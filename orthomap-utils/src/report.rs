//! End-of-run summary

use crate::display::{create_standard_table, format_number, header_cell};
use comfy_table::Table;
use orthomap_bio::OrthologPair;
use orthomap_core::SequenceType;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub orthologs: usize,
    pub mean_identity: Option<f64>,
    pub undefined_ratios: usize,
    pub type_a: SequenceType,
    pub type_b: SequenceType,
    pub output: PathBuf,
}

impl RunSummary {
    pub fn new(pairs: &[OrthologPair], type_a: SequenceType, type_b: SequenceType, output: PathBuf) -> Self {
        let mean_identity = if pairs.is_empty() {
            None
        } else {
            Some(pairs.iter().map(|p| p.metrics.identity_pct).sum::<f64>() / pairs.len() as f64)
        };
        Self {
            orthologs: pairs.len(),
            mean_identity,
            undefined_ratios: pairs.iter().filter(|p| !p.metrics.len_ratio.is_defined()).count(),
            type_a,
            type_b,
            output,
        }
    }

    pub fn to_table(&self) -> Table {
        let mut table = create_standard_table();
        table.set_header(vec![header_cell("Execution summary"), header_cell("")]);
        table.add_row(vec!["Total orthologs mapped".to_string(), format_number(self.orthologs)]);
        table.add_row(vec![
            "Mean identity".to_string(),
            self.mean_identity
                .map(|m| format!("{:.2}%", m))
                .unwrap_or_else(|| "-".to_string()),
        ]);
        if self.undefined_ratios > 0 {
            table.add_row(vec![
                "Undefined length ratios".to_string(),
                format_number(self.undefined_ratios),
            ]);
        }
        table.add_row(vec!["Table 1 format".to_string(), self.type_a.to_string().to_uppercase()]);
        table.add_row(vec!["Table 2 format".to_string(), self.type_b.to_string().to_uppercase()]);
        table.add_row(vec!["Output".to_string(), self.output.display().to_string()]);
        table
    }
}
