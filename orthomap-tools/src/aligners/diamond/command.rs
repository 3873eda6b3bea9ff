//! Argument lists for the DIAMOND subcommands used by a search

use crate::traits::{SearchParams, MAX_TARGET_SEQS};
use orthomap_bio::TABULAR_FIELDS;
use orthomap_core::AlignmentMode;
use std::ffi::OsString;
use std::path::Path;

pub(super) fn makedb_args(fasta: &Path, database: &Path) -> Vec<OsString> {
    vec![
        "makedb".into(),
        "--in".into(),
        fasta.into(),
        "-d".into(),
        database.into(),
        "--quiet".into(),
    ]
}

pub(super) fn search_args(
    mode: AlignmentMode,
    query: &Path,
    database: &Path,
    output: &Path,
    params: &SearchParams,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        mode.subcommand().into(),
        "-q".into(),
        query.into(),
        "-d".into(),
        database.into(),
        "--threads".into(),
        params.threads.to_string().into(),
        "--evalue".into(),
        params.max_evalue.to_string().into(),
        "--id".into(),
        params.min_identity.to_string().into(),
        "--query-cover".into(),
        params.min_coverage.to_string().into(),
        "--max-target-seqs".into(),
        MAX_TARGET_SEQS.to_string().into(),
        "--outfmt".into(),
        "6".into(),
    ];
    args.extend(TABULAR_FIELDS.iter().map(OsString::from));
    args.push("--quiet".into());
    args.push("-o".into());
    args.push(output.into());
    args
}
