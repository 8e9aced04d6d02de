//! Collectors receive the documents matched by a search, one at a time
//!
//! Counting matches doesn't need a collector, see `IndexSearcher::count`.

pub mod top_score;


/// A matching document
///
/// The score is only present when the collector asked for scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    doc_id: u32,
    score: Option<f64>,
}


impl Hit {
    pub fn scored(doc_id: u32, score: f64) -> Hit {
        Hit {
            doc_id: doc_id,
            score: Some(score),
        }
    }

    pub fn unscored(doc_id: u32) -> Hit {
        Hit {
            doc_id: doc_id,
            score: None,
        }
    }

    #[inline]
    pub fn doc_id(&self) -> u32 {
        self.doc_id
    }

    #[inline]
    pub fn score(&self) -> Option<f64> {
        self.score
    }
}


pub trait Collector {
    /// Whether hits should carry scores
    ///
    /// Searching for a collector that returns false builds weights without
    /// scoring, so boolean queries run their MUST clauses as filters.
    fn needs_scores(&self) -> bool;

    fn collect(&mut self, hit: Hit);
}
