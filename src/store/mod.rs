pub mod memory;

use roaring::RoaringBitmap;

use crate::term::Term;
use crate::query::clause_limit::ClauseLimit;


/// A read-only snapshot of an index
///
/// Queries are rewritten against a snapshot and weights read postings and
/// statistics from it. Nothing in the query layer mutates it.
pub trait IndexReader {
    fn num_docs(&self) -> u64;
    fn all_docs(&self) -> &RoaringBitmap;

    /// All terms indexed in the field, in ascending order
    fn terms(&self, field: &str) -> Vec<Term>;
    fn docs_with_term(&self, field: &str, term: &Term) -> Option<&RoaringBitmap>;
    fn term_frequency(&self, field: &str, term: &Term, doc_id: u32) -> u32;
    fn field_length(&self, field: &str, doc_id: u32) -> u32;
    fn total_tokens(&self, field: &str) -> u64;

    fn num_docs_with_term(&self, field: &str, term: &Term) -> u64 {
        self.docs_with_term(field, term).map_or(0, |docs| docs.len())
    }

    /// The clause limit that applies to queries built while rewriting
    /// against this snapshot
    fn clause_limit(&self) -> &ClauseLimit {
        ClauseLimit::global()
    }
}
