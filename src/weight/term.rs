use std::collections::HashMap;

use roaring::RoaringBitmap;

use crate::term::Term;
use crate::searcher::IndexSearcher;
use crate::similarity::TermStatistics;
use crate::weight::Weight;


#[derive(Debug)]
pub struct TermWeight {
    docs: RoaringBitmap,
    scores: HashMap<u32, f64>,
    needs_scores: bool,
}


impl TermWeight {
    pub fn new(searcher: &IndexSearcher, field: &str, term: &Term, boost: f64, needs_scores: bool) -> TermWeight {
        let reader = searcher.reader();

        let docs = match reader.docs_with_term(field, term) {
            Some(docs) => docs.clone(),
            None => RoaringBitmap::new(),
        };

        let mut scores = HashMap::new();
        if needs_scores && !docs.is_empty() {
            let stats = TermStatistics::from_reader(reader, field, term);

            for doc_id in docs.iter() {
                let term_frequency = reader.term_frequency(field, term, doc_id);
                let field_length = reader.field_length(field, doc_id);
                let score = searcher.similarity().score(&stats, term_frequency, field_length);

                scores.insert(doc_id, score * boost);
            }
        }

        TermWeight {
            docs: docs,
            scores: scores,
            needs_scores: needs_scores,
        }
    }
}


impl Weight for TermWeight {
    fn doc_set(&self) -> &RoaringBitmap {
        &self.docs
    }

    fn score(&self, doc_id: u32) -> Option<f64> {
        if !self.docs.contains(doc_id) {
            return None;
        }

        Some(self.scores.get(&doc_id).cloned().unwrap_or(0.0))
    }

    fn needs_scores(&self) -> bool {
        self.needs_scores
    }
}
