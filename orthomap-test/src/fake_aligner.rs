//! Shell script that answers DIAMOND's command line from canned hits.
//!
//! `makedb` copies its input, `blastp`/`blastx` emit the canned lines whose
//! query id appears in the query FASTA, `version` prints a version string.
//! Every subcommand is appended to `calls.log` next to the script.

use anyhow::{Context, Result};
use orthomap_bio::SimilarityHit;
use std::fs;
use std::path::{Path, PathBuf};

use crate::fixtures::hits_to_tabular;

const SCRIPT: &str = r#"#!/bin/sh
cmd="$1"
[ "$#" -gt 0 ] && shift
query=""; db=""; out=""; infile=""
while [ "$#" -gt 0 ]; do
  case "$1" in
    -q) query="$2"; shift ;;
    -d) db="$2"; shift ;;
    -o) out="$2"; shift ;;
    --in) infile="$2"; shift ;;
  esac
  shift
done
echo "$cmd" >> "__LOG__"
case "$cmd" in
  version) echo "diamond version 2.1.8" ;;
  makedb) [ -s "$infile" ] || exit 1; cp "$infile" "$db.dmnd" ;;
  blastp|blastx)
    __FAIL__
    awk -F'\t' 'NR==FNR { if (substr($0,1,1)==">") ids[substr($0,2)]=1; next } ($1 in ids)' "$query" "__HITS__" > "$out" ;;
  *) echo "unknown command $cmd" >&2; exit 2 ;;
esac
"#;

pub struct FakeDiamond {
    dir: PathBuf,
    hits: Vec<SimilarityHit>,
    fail: bool,
}

impl FakeDiamond {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.join("fake-diamond"),
            hits: Vec::new(),
            fail: false,
        }
    }

    /// Canned hits for both directions
    pub fn with_hits(mut self, hits: Vec<SimilarityHit>) -> Self {
        self.hits = hits;
        self
    }

    /// Searches exit with status 1 after printing to stderr
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Write the script and return its path
    #[cfg(unix)]
    pub fn install(&self) -> Result<PathBuf> {
        use std::os::unix::fs::PermissionsExt;

        fs::create_dir_all(&self.dir)?;
        let hits_path = self.dir.join("hits.tsv");
        fs::write(&hits_path, hits_to_tabular(&self.hits))?;

        let fail = if self.fail {
            "echo \"Error: simulated search failure\" >&2; exit 1"
        } else {
            ":"
        };
        let script = SCRIPT
            .replace("__LOG__", &self.log_path().to_string_lossy())
            .replace("__HITS__", &hits_path.to_string_lossy())
            .replace("__FAIL__", fail);

        let script_path = self.dir.join("diamond");
        fs::write(&script_path, script)
            .with_context(|| format!("Failed to write {}", script_path.display()))?;
        fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755))?;
        Ok(script_path)
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.join("calls.log")
    }

    /// Subcommands received so far
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
