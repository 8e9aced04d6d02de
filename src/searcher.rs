use crate::errors::Result;
use crate::store::IndexReader;
use crate::similarity::SimilarityModel;
use crate::query::QueryRef;
use crate::weight::Weight;
use crate::collectors::{Collector, Hit};


/// Runs queries against a single index snapshot
pub struct IndexSearcher<'a> {
    reader: &'a dyn IndexReader,
    similarity: SimilarityModel,
}


impl<'a> IndexSearcher<'a> {
    pub fn new(reader: &'a dyn IndexReader) -> IndexSearcher<'a> {
        IndexSearcher {
            reader: reader,
            similarity: SimilarityModel::default(),
        }
    }

    pub fn with_similarity(mut self, similarity: SimilarityModel) -> IndexSearcher<'a> {
        self.similarity = similarity;
        self
    }

    pub fn reader(&self) -> &dyn IndexReader {
        self.reader
    }

    pub fn similarity(&self) -> &SimilarityModel {
        &self.similarity
    }

    /// Rewrites the query until it stops changing
    ///
    /// Returns the same `Arc` that was passed in if nothing could be
    /// rewritten, so calling this on its own output is free.
    pub fn rewrite(&self, query: QueryRef) -> Result<QueryRef> {
        let mut query = query;

        while let Some(rewritten) = query.rewrite(self.reader)? {
            debug!("rewrote {} into {}", query, rewritten);
            query = rewritten;
        }

        Ok(query)
    }

    pub fn create_weight(&self, query: QueryRef, needs_scores: bool) -> Result<Box<dyn Weight>> {
        let query = self.rewrite(query)?;
        debug!("creating weight for {} (needs_scores: {})", query, needs_scores);
        query.create_weight(self, needs_scores)
    }

    pub fn search<C: Collector>(&self, query: QueryRef, collector: &mut C) -> Result<()> {
        let needs_scores = collector.needs_scores();
        let weight = self.create_weight(query, needs_scores)?;

        for doc_id in weight.doc_set().iter() {
            if needs_scores {
                let score = weight.score(doc_id).unwrap_or(0.0);
                collector.collect(Hit::scored(doc_id, score));
            } else {
                collector.collect(Hit::unscored(doc_id));
            }
        }

        Ok(())
    }

    /// Number of documents matching the query, computed without scoring
    pub fn count(&self, query: QueryRef) -> Result<u64> {
        let weight = self.create_weight(query, false)?;
        Ok(weight.doc_set().len())
    }
}
