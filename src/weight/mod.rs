//! Weights
//!
//! A weight is built from a query for a single search. It knows which
//! documents the query matches and, if scores were requested, how each of
//! them scores.

pub mod term;
pub mod boolean;

use std::fmt;

use roaring::RoaringBitmap;

use crate::searcher::IndexSearcher;


pub trait Weight: fmt::Debug {
    /// The documents this weight matches
    fn doc_set(&self) -> &RoaringBitmap;

    /// Score of a document, `None` if the document doesn't match
    ///
    /// Weights created without scores give every match a score of zero.
    fn score(&self, doc_id: u32) -> Option<f64>;

    fn needs_scores(&self) -> bool;
}


#[derive(Debug)]
pub struct MatchAllWeight {
    docs: RoaringBitmap,
    boost: f64,
    needs_scores: bool,
}


impl MatchAllWeight {
    pub fn new(searcher: &IndexSearcher, boost: f64, needs_scores: bool) -> MatchAllWeight {
        MatchAllWeight {
            docs: searcher.reader().all_docs().clone(),
            boost: boost,
            needs_scores: needs_scores,
        }
    }
}


impl Weight for MatchAllWeight {
    fn doc_set(&self) -> &RoaringBitmap {
        &self.docs
    }

    fn score(&self, doc_id: u32) -> Option<f64> {
        if !self.docs.contains(doc_id) {
            return None;
        }

        if self.needs_scores {
            Some(self.boost)
        } else {
            Some(0.0)
        }
    }

    fn needs_scores(&self) -> bool {
        self.needs_scores
    }
}


#[derive(Debug)]
pub struct MatchNoneWeight {
    docs: RoaringBitmap,
    needs_scores: bool,
}


impl MatchNoneWeight {
    pub fn new(needs_scores: bool) -> MatchNoneWeight {
        MatchNoneWeight {
            docs: RoaringBitmap::new(),
            needs_scores: needs_scores,
        }
    }
}


impl Weight for MatchNoneWeight {
    fn doc_set(&self) -> &RoaringBitmap {
        &self.docs
    }

    fn score(&self, _doc_id: u32) -> Option<f64> {
        None
    }

    fn needs_scores(&self) -> bool {
        self.needs_scores
    }
}


/// Gives every document matched by the inner weight the same score
#[derive(Debug)]
pub struct ConstantScoreWeight {
    inner: Box<dyn Weight>,
    score: f64,
    needs_scores: bool,
}


impl ConstantScoreWeight {
    pub fn new(inner: Box<dyn Weight>, score: f64, needs_scores: bool) -> ConstantScoreWeight {
        ConstantScoreWeight {
            inner: inner,
            score: score,
            needs_scores: needs_scores,
        }
    }
}


impl Weight for ConstantScoreWeight {
    fn doc_set(&self) -> &RoaringBitmap {
        self.inner.doc_set()
    }

    fn score(&self, doc_id: u32) -> Option<f64> {
        if !self.inner.doc_set().contains(doc_id) {
            return None;
        }

        if self.needs_scores {
            Some(self.score)
        } else {
            Some(0.0)
        }
    }

    fn needs_scores(&self) -> bool {
        self.needs_scores
    }
}


#[derive(Debug)]
pub struct BoostWeight {
    inner: Box<dyn Weight>,
    boost: f64,
}


impl BoostWeight {
    pub fn new(inner: Box<dyn Weight>, boost: f64) -> BoostWeight {
        BoostWeight {
            inner: inner,
            boost: boost,
        }
    }
}


impl Weight for BoostWeight {
    fn doc_set(&self) -> &RoaringBitmap {
        self.inner.doc_set()
    }

    fn score(&self, doc_id: u32) -> Option<f64> {
        self.inner.score(doc_id).map(|score| score * self.boost)
    }

    fn needs_scores(&self) -> bool {
        self.inner.needs_scores()
    }
}
