//! Scoring models
//!
//! A model scores one term in one document from two kinds of input: the
//! index-wide `TermStatistics` of the term, read once per weight, and the
//! per-document term frequency and field length.

use crate::term::Term;
use crate::store::IndexReader;


/// Index-wide statistics of a term in a field
#[derive(Debug, Clone, PartialEq)]
pub struct TermStatistics {
    pub total_docs: u64,
    pub docs_with_term: u64,
    pub average_field_length: f64,
}


impl TermStatistics {
    pub fn from_reader(reader: &dyn IndexReader, field: &str, term: &Term) -> TermStatistics {
        let total_docs = reader.num_docs();
        let average_field_length = if total_docs > 0 {
            reader.total_tokens(field) as f64 / total_docs as f64
        } else {
            0.0
        };

        TermStatistics {
            total_docs: total_docs,
            docs_with_term: reader.num_docs_with_term(field, term),
            average_field_length: average_field_length,
        }
    }
}


#[derive(Debug, Clone, PartialEq)]
pub enum SimilarityModel {
    /// Square root term frequency times inverse document frequency.
    /// Field length is ignored.
    TfIdf,

    /// Okapi BM25. `k1` controls term frequency saturation and `b` how
    /// strongly long fields are penalised.
    Bm25{k1: f64, b: f64},
}


impl Default for SimilarityModel {
    fn default() -> SimilarityModel {
        SimilarityModel::Bm25 {
            k1: 1.2,
            b: 0.75,
        }
    }
}


impl SimilarityModel {
    /// How much a match on this term is worth, rarer terms are worth more
    ///
    /// Always positive, even for a term found in every document.
    pub fn idf(&self, stats: &TermStatistics) -> f64 {
        let total_docs = stats.total_docs as f64;
        let docs_with_term = stats.docs_with_term as f64;

        match *self {
            SimilarityModel::TfIdf => {
                1.0 + ((total_docs + 1.0) / (docs_with_term + 1.0)).ln()
            }
            SimilarityModel::Bm25{..} => {
                (1.0 + (total_docs - docs_with_term + 0.5) / (docs_with_term + 0.5)).ln()
            }
        }
    }

    pub fn score(&self, stats: &TermStatistics, term_frequency: u32, field_length: u32) -> f64 {
        if term_frequency == 0 {
            return 0.0;
        }

        let frequency = term_frequency as f64;
        let tf = match *self {
            SimilarityModel::TfIdf => frequency.sqrt(),
            SimilarityModel::Bm25{k1, b} => {
                let relative_length = if stats.average_field_length > 0.0 {
                    field_length as f64 / stats.average_field_length
                } else {
                    1.0
                };

                frequency * (k1 + 1.0) / (frequency + k1 * (1.0 - b + b * relative_length))
            }
        };

        tf * self.idf(stats)
    }
}
