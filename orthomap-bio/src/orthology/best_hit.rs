use crate::hits::SimilarityHit;
use indexmap::map::Entry;
use indexmap::IndexMap;

/// At most one hit per query id for one search direction.
///
/// Iteration follows the order in which each query was first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BestHitIndex {
    hits: IndexMap<String, SimilarityHit>,
}

impl BestHitIndex {
    /// Keep the highest-bitscore hit of every query.
    ///
    /// A later hit replaces the kept one only when its bitscore is strictly
    /// greater, so exact ties resolve to the first hit in input order.
    pub fn from_hits<I>(hits: I) -> Self
    where
        I: IntoIterator<Item = SimilarityHit>,
    {
        let mut index: IndexMap<String, SimilarityHit> = IndexMap::new();
        for hit in hits {
            match index.entry(hit.query_id.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(hit);
                }
                Entry::Occupied(mut slot) => {
                    if hit.bitscore > slot.get().bitscore {
                        slot.insert(hit);
                    }
                }
            }
        }
        Self { hits: index }
    }

    pub fn get(&self, query_id: &str) -> Option<&SimilarityHit> {
        self.hits.get(query_id)
    }

    /// Subject of the best hit for `query_id`
    pub fn best_subject(&self, query_id: &str) -> Option<&str> {
        self.get(query_id).map(|hit| hit.subject_id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SimilarityHit> {
        self.hits.values()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

impl FromIterator<SimilarityHit> for BestHitIndex {
    fn from_iter<T: IntoIterator<Item = SimilarityHit>>(iter: T) -> Self {
        Self::from_hits(iter)
    }
}
