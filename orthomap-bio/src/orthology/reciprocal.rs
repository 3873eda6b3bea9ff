use super::{BestHitIndex, OrthologPair};
use std::collections::HashSet;
use tracing::debug;

/// Pairs `(a, b)` with `forward[a] -> b` and `reverse[b] -> a`.
///
/// `forward` holds A-to-B best hits keyed by A ids, `reverse` holds B-to-A
/// best hits keyed by B ids. Output follows `forward` iteration order and
/// carries the forward hit's metrics. An empty result is a valid outcome.
pub fn resolve_reciprocal(forward: &BestHitIndex, reverse: &BestHitIndex) -> Vec<OrthologPair> {
    let pairs: Vec<OrthologPair> = forward
        .iter()
        .filter(|hit| reverse.best_subject(&hit.subject_id) == Some(hit.query_id.as_str()))
        .map(OrthologPair::from_forward_hit)
        .collect();

    debug_assert!(is_one_to_one(&pairs), "reciprocal pairs must be 1-to-1");
    debug!(
        forward = forward.len(),
        reverse = reverse.len(),
        reciprocal = pairs.len(),
        "resolved reciprocal best hits"
    );
    pairs
}

/// No `a_id` and no `b_id` appears in more than one pair
pub(crate) fn is_one_to_one(pairs: &[OrthologPair]) -> bool {
    let mut seen_a = HashSet::with_capacity(pairs.len());
    let mut seen_b = HashSet::with_capacity(pairs.len());
    pairs
        .iter()
        .all(|p| seen_a.insert(p.a_id.as_str()) && seen_b.insert(p.b_id.as_str()))
}
