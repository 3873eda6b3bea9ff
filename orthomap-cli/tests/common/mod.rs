#![allow(dead_code)]

use assert_cmd::Command;
use orthomap_test::{delimited, TestEnvironment};
use std::path::{Path, PathBuf};

pub use orthomap_test::{hit, FakeDiamond, Result};

/// `orthomap` binary with a clean environment
pub fn orthomap_cmd() -> Command {
    let mut cmd = Command::cargo_bin("orthomap").unwrap();
    cmd.env_remove("ORTHOMAP_DIAMOND")
        .env_remove("ORTHOMAP_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// One protein per table with identical sequences
pub fn write_protein_tables(env: &TestEnvironment) -> Result<(PathBuf, PathBuf)> {
    let t1 = env.create_input_file(
        "uniprot.csv",
        &delimited(',', &["id", "seq", "name"], &[&["P1", "MKTAYIAK", "kinase"]]),
    )?;
    let t2 = env.create_input_file(
        "rast.tsv",
        &delimited('\t', &["gene", "seq"], &[&["G1", "MKTAYIAK"]]),
    )?;
    Ok((t1, t2))
}

/// Base arguments for a run over `t1`/`t2` with sequence column `seq`
pub fn run_args(cmd: &mut Command, t1: &Path, t2: &Path, out: &Path) {
    cmd.arg("--t1").arg(t1)
        .arg("--t2").arg(t2)
        .arg("--s1").arg("seq")
        .arg("--s2").arg("seq")
        .arg("--out").arg(out);
}
