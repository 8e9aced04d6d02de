use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::collectors::{Collector, Hit};


/// Upper bound on the heap space reserved up front, the heap grows past it
/// on demand
const MAX_PREALLOCATED_HITS: usize = 1024;


/// An f64 that cannot be NaN.
/// We need to order documents by score but NaN cannot be ordered, so we convert all scores into
/// RealF64 first, handling any invalid values while doing that conversion
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
struct RealF64(f64);

impl RealF64 {
    fn new(val: f64) -> Option<RealF64> {
        if val.is_nan() {
            None
        } else {
            Some(RealF64(val))
        }
    }
}

impl Eq for RealF64 {}

impl Ord for RealF64 {
    fn cmp(&self, other: &RealF64) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}


#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct RankedHit {
    doc_id: u32,
    score: RealF64,
}

impl Ord for RankedHit {
    /// Better hits order first: higher score, then lower document id
    fn cmp(&self, other: &RankedHit) -> Ordering {
        other.score.cmp(&self.score).then_with(|| self.doc_id.cmp(&other.doc_id))
    }
}

impl PartialOrd for RankedHit {
    fn partial_cmp(&self, other: &RankedHit) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}


/// Keeps the `max_hits` best scoring hits
///
/// The heap's greatest element is the worst hit kept so far, so it is the one
/// evicted when a better hit arrives.
#[derive(Debug)]
pub struct TopScoreCollector {
    max_hits: usize,
    heap: BinaryHeap<RankedHit>,
}


impl TopScoreCollector {
    pub fn new(max_hits: usize) -> TopScoreCollector {
        TopScoreCollector {
            max_hits: max_hits,
            heap: BinaryHeap::with_capacity(max_hits.saturating_add(1).min(MAX_PREALLOCATED_HITS)),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The collected hits, best first
    pub fn into_sorted_vec(self) -> Vec<Hit> {
        self.heap.into_sorted_vec()
            .into_iter()
            .map(|ranked| Hit::scored(ranked.doc_id, ranked.score.0))
            .collect()
    }
}


impl Collector for TopScoreCollector {
    fn needs_scores(&self) -> bool {
        true
    }

    fn collect(&mut self, hit: Hit) {
        let score = match hit.score().map(RealF64::new) {
            Some(Some(score)) => score,
            Some(None) => {
                warn!("document {} with 'NaN' score was passed into TopScoreCollector", hit.doc_id());
                return;
            }
            None => {
                warn!("unscored document {} was passed into TopScoreCollector", hit.doc_id());
                return;
            }
        };

        if self.max_hits == 0 {
            return;
        }

        self.heap.push(RankedHit {
            doc_id: hit.doc_id(),
            score: score,
        });

        if self.heap.len() > self.max_hits {
            self.heap.pop();
        }
    }
}
