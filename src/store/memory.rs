use std::collections::{BTreeMap, HashMap};

use roaring::RoaringBitmap;

use crate::term::Term;
use crate::document::Document;
use crate::store::IndexReader;
use crate::query::clause_limit::ClauseLimit;


#[derive(Debug, Default)]
struct Postings {
    docs: RoaringBitmap,
    frequencies: HashMap<u32, u32>,
}


#[derive(Debug, Default)]
struct FieldIndex {
    terms: BTreeMap<Term, Postings>,
    lengths: HashMap<u32, u32>,
    total_tokens: u64,
}


/// An index held entirely in memory
#[derive(Debug, Default)]
pub struct MemoryIndex {
    docs: RoaringBitmap,
    fields: HashMap<String, FieldIndex>,
    next_doc_id: u32,
    clause_limit: Option<ClauseLimit>,
}


impl MemoryIndex {
    pub fn new() -> MemoryIndex {
        MemoryIndex::default()
    }

    /// Use an index-specific clause limit instead of the global one
    pub fn set_clause_limit(&mut self, clause_limit: ClauseLimit) {
        self.clause_limit = Some(clause_limit);
    }

    pub fn insert_document(&mut self, doc: Document) -> u32 {
        let doc_id = self.next_doc_id;
        self.next_doc_id += 1;

        for (field_name, terms) in doc.fields {
            let field = self.fields.entry(field_name).or_insert_with(FieldIndex::default);
            let length = terms.len();

            for term in terms {
                let postings = field.terms.entry(term).or_insert_with(Postings::default);
                postings.docs.insert(doc_id);
                *postings.frequencies.entry(doc_id).or_insert(0) += 1;
            }

            *field.lengths.entry(doc_id).or_insert(0) += length as u32;
            field.total_tokens += length as u64;
        }

        self.docs.insert(doc_id);
        doc_id
    }

    fn postings(&self, field: &str, term: &Term) -> Option<&Postings> {
        self.fields.get(field).and_then(|field| field.terms.get(term))
    }
}


impl IndexReader for MemoryIndex {
    fn num_docs(&self) -> u64 {
        self.docs.len()
    }

    fn all_docs(&self) -> &RoaringBitmap {
        &self.docs
    }

    fn terms(&self, field: &str) -> Vec<Term> {
        match self.fields.get(field) {
            Some(field) => field.terms.keys().cloned().collect(),
            None => Vec::new(),
        }
    }

    fn docs_with_term(&self, field: &str, term: &Term) -> Option<&RoaringBitmap> {
        self.postings(field, term).map(|postings| &postings.docs)
    }

    fn term_frequency(&self, field: &str, term: &Term, doc_id: u32) -> u32 {
        self.postings(field, term)
            .and_then(|postings| postings.frequencies.get(&doc_id).cloned())
            .unwrap_or(0)
    }

    fn field_length(&self, field: &str, doc_id: u32) -> u32 {
        self.fields.get(field)
            .and_then(|field| field.lengths.get(&doc_id).cloned())
            .unwrap_or(0)
    }

    fn total_tokens(&self, field: &str) -> u64 {
        self.fields.get(field).map_or(0, |field| field.total_tokens)
    }

    fn clause_limit(&self) -> &ClauseLimit {
        match self.clause_limit {
            Some(ref clause_limit) => clause_limit,
            None => ClauseLimit::global(),
        }
    }
}
