use std::any::Any;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::errors::Result;
use crate::store::IndexReader;
use crate::searcher::IndexSearcher;
use crate::weight::{Weight, BoostWeight};
use crate::query::{Query, QueryRef, downcast_eq, hash_with_type, hash_boost};


/// Multiplies the scores of the wrapped query by a boost
///
/// A boost of zero keeps the wrapped query's matches but removes its score
/// contribution.
#[derive(Debug, Clone)]
pub struct BoostQuery {
    query: QueryRef,
    boost: f64,
}


impl BoostQuery {
    pub fn new(query: QueryRef, boost: f64) -> BoostQuery {
        BoostQuery {
            query: query,
            boost: boost,
        }
    }

    pub fn query(&self) -> &QueryRef {
        &self.query
    }
}


impl PartialEq for BoostQuery {
    fn eq(&self, other: &BoostQuery) -> bool {
        self.boost == other.boost && *self.query == *other.query
    }
}

impl Eq for BoostQuery {}

impl Hash for BoostQuery {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.query.hash(state);
        hash_boost(self.boost, state);
    }
}


impl Query for BoostQuery {
    fn rewrite(&self, reader: &dyn IndexReader) -> Result<Option<QueryRef>> {
        if self.boost == 1.0 {
            return Ok(Some(self.query.clone()));
        }

        match self.query.rewrite(reader)? {
            Some(rewritten) => Ok(Some(Arc::new(BoostQuery::new(rewritten, self.boost)))),
            None => Ok(None),
        }
    }

    fn create_weight(&self, searcher: &IndexSearcher, needs_scores: bool) -> Result<Box<dyn Weight>> {
        let inner = self.query.create_weight(searcher, needs_scores)?;
        Ok(Box::new(BoostWeight::new(inner, self.boost)))
    }

    fn to_string_field(&self, field: &str) -> String {
        format!("({})^{:?}", self.query.to_string_field(field), self.boost)
    }

    fn boost(&self) -> f64 {
        self.boost
    }

    fn eq_query(&self, other: &dyn Query) -> bool {
        downcast_eq(self, other)
    }

    fn hash_query(&self, state: &mut dyn Hasher) {
        hash_with_type(self, state)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::term::Term;
    use crate::document::Document;
    use crate::store::memory::MemoryIndex;
    use crate::searcher::IndexSearcher;
    use crate::query::{Query, QueryRef};
    use crate::query::term_query::TermQuery;
    use super::BoostQuery;

    fn foo() -> QueryRef {
        Arc::new(TermQuery::new("title", Term::from_string("foo")))
    }

    #[test]
    fn test_rewrite_unit_boost_unwraps() {
        let index = MemoryIndex::new();
        let inner = foo();
        let query = BoostQuery::new(inner.clone(), 1.0);

        let rewritten = query.rewrite(&index).unwrap().unwrap();

        assert!(Arc::ptr_eq(&rewritten, &inner));
    }

    #[test]
    fn test_rewrite_unchanged_inner() {
        let index = MemoryIndex::new();
        let query = BoostQuery::new(foo(), 3.0);

        assert!(query.rewrite(&index).unwrap().is_none());
    }

    #[test]
    fn test_scores_are_multiplied() {
        let mut index = MemoryIndex::new();
        index.insert_document(Document::new().text("title", "foo"));
        let searcher = IndexSearcher::new(&index);

        let plain = foo().create_weight(&searcher, true).unwrap();
        let boosted = BoostQuery::new(foo(), 3.0).create_weight(&searcher, true).unwrap();
        let zeroed = BoostQuery::new(foo(), 0.0).create_weight(&searcher, true).unwrap();

        assert_eq!(boosted.score(0), Some(plain.score(0).unwrap() * 3.0));
        assert_eq!(zeroed.score(0), Some(0.0));
        assert_eq!(zeroed.doc_set().len(), 1);
    }

    #[test]
    fn test_to_string() {
        assert_eq!(BoostQuery::new(foo(), 0.0).to_string_field("title"), "(foo)^0.0");
    }

    #[test]
    fn test_zero_boosts_are_equal() {
        let a: QueryRef = Arc::new(BoostQuery::new(foo(), 0.0));
        let b: QueryRef = Arc::new(BoostQuery::new(foo(), -0.0));

        assert!(*a == *b);
    }
}
