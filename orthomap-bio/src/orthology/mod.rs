//! Reciprocal best-hit orthology
//!
//! Each search direction is first reduced to one best hit per query
//! ([`BestHitIndex`]). Two indices are then intersected by
//! [`resolve_reciprocal`]: `a` and `b` are paired only when `a`'s best hit is
//! `b` and `b`'s best hit is `a`. A query absent from an index had no hit
//! that passed the aligner's filters and therefore has no ortholog.

mod best_hit;
mod pair;
mod reciprocal;

pub use best_hit::BestHitIndex;
pub use pair::{format_metric, LengthRatio, OrthologPair, PairMetrics};
pub use reciprocal::resolve_reciprocal;
