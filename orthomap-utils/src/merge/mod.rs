//! Annotation merge: ortholog pairs joined back to the first source table

mod passthrough;

pub use passthrough::{PassthroughSpec, ResolvedPassthrough, COLLISION_SUFFIX};

use crate::table::SourceTable;
use orthomap_bio::{OrthologPair, PairMetrics};
use orthomap_core::OrthomapResult;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Suffix for the second id column when both tables use the same id name
pub const SECOND_ID_SUFFIX: &str = "_t2";

/// Final output: one row per ortholog pair
#[derive(Debug, Clone, PartialEq)]
pub struct MergedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Passthrough names that were requested but not found
    pub dropped_columns: Vec<String>,
}

/// Build output rows for `pairs`.
///
/// Columns are `id_a`, `id_b`, the [`PairMetrics::COLUMNS`], then the
/// resolved passthrough columns of `table_a`. Passthrough values are joined on
/// `table_a[id_a] == pair.a_id` as a left outer join: a pair without a
/// matching row keeps empty passthrough cells. When `id_a` repeats in
/// `table_a` the first row is used.
pub fn merge_annotations(
    pairs: &[OrthologPair],
    table_a: &SourceTable,
    id_a: &str,
    id_b: &str,
    passthrough: &PassthroughSpec,
) -> OrthomapResult<MergedTable> {
    let key_index = table_a.column_index(id_a)?;

    let mut headers = vec![id_a.to_string()];
    headers.push(if id_b == id_a {
        format!("{}{}", id_b, SECOND_ID_SUFFIX)
    } else {
        id_b.to_string()
    });
    headers.extend(PairMetrics::COLUMNS.iter().map(|c| c.to_string()));

    let resolved = passthrough.resolve(&table_a.headers, id_a, &headers);
    if !resolved.dropped.is_empty() {
        warn!(columns = ?resolved.dropped, "passthrough columns not found in {}", table_a.label);
    }
    headers.extend(resolved.columns.iter().map(|(_, name)| name.clone()));

    let mut lookup: HashMap<&str, &Vec<String>> = HashMap::with_capacity(table_a.len());
    if !resolved.columns.is_empty() {
        for row in &table_a.rows {
            if let Some(key) = row.get(key_index) {
                lookup.entry(key.as_str()).or_insert(row);
            }
        }
    }

    let rows: Vec<Vec<String>> = pairs
        .iter()
        .map(|pair| {
            let mut row = Vec::with_capacity(headers.len());
            row.push(pair.a_id.clone());
            row.push(pair.b_id.clone());
            row.extend(pair.metrics.to_fields());

            let source = lookup.get(pair.a_id.as_str());
            for (index, _) in &resolved.columns {
                row.push(
                    source
                        .and_then(|r| r.get(*index))
                        .cloned()
                        .unwrap_or_default(),
                );
            }
            row
        })
        .collect();

    debug!(rows = rows.len(), columns = headers.len(), "merged annotations");
    Ok(MergedTable {
        headers,
        rows,
        dropped_columns: resolved.dropped,
    })
}

impl MergedTable {
    /// Write header and rows in one pass
    pub fn write<P: AsRef<Path>>(&self, path: P, delimiter: u8) -> OrthomapResult<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_path(path.as_ref())?;
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
