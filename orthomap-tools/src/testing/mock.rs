//! Mock aligner for tests

use crate::traits::{Aligner, SearchRequest};
use orthomap_bio::SimilarityHit;
use orthomap_core::{AlignmentMode, OrthomapError, OrthomapResult};
use std::collections::HashSet;
use std::sync::Mutex;

/// Serves canned hits instead of running a tool.
///
/// A search returns every canned hit whose query id is in the request's
/// query set and whose subject id is in its database set, so one mock can
/// answer both directions of a run.
#[derive(Debug, Default)]
pub struct MockAligner {
    hits: Vec<SimilarityHit>,
    failure: Option<String>,
    calls: Mutex<Vec<AlignmentMode>>,
    threads: Mutex<Vec<usize>>,
}

impl MockAligner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hits(hits: Vec<SimilarityHit>) -> Self {
        Self {
            hits,
            ..Self::default()
        }
    }

    /// Every search fails as if the tool exited with status 1
    pub fn failing(stderr: impl Into<String>) -> Self {
        Self {
            failure: Some(stderr.into()),
            ..Self::default()
        }
    }

    /// Modes of the searches run so far, in call order
    pub fn calls(&self) -> Vec<AlignmentMode> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Thread budgets of the searches run so far, in call order
    pub fn thread_counts(&self) -> Vec<usize> {
        self.threads.lock().map(|t| t.clone()).unwrap_or_default()
    }
}

impl Aligner for MockAligner {
    fn name(&self) -> &str {
        "mock"
    }

    fn search(&self, request: &SearchRequest<'_>) -> OrthomapResult<Vec<SimilarityHit>> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.mode);
        }
        if let Ok(mut threads) = self.threads.lock() {
            threads.push(request.params.threads);
        }
        if let Some(stderr) = &self.failure {
            return Err(OrthomapError::Aligner {
                tool: self.name().to_string(),
                status: 1,
                stderr: stderr.clone(),
            });
        }

        let queries: HashSet<&str> = request.query.iter().map(|r| r.id.as_str()).collect();
        let subjects: HashSet<&str> = request.database.iter().map(|r| r.id.as_str()).collect();
        Ok(self
            .hits
            .iter()
            .filter(|h| {
                queries.contains(h.query_id.as_str()) && subjects.contains(h.subject_id.as_str())
            })
            .cloned()
            .collect())
    }

    fn version(&self) -> OrthomapResult<String> {
        Ok("MockAligner 1.0.0".to_string())
    }
}
