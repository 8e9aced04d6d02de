use std::any::Any;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::errors::Result;
use crate::store::IndexReader;
use crate::searcher::IndexSearcher;
use crate::weight::{Weight, ConstantScoreWeight};
use crate::query::{Query, QueryRef, downcast_eq, hash_with_type};


/// Matches the same documents as the wrapped query, giving each a score of 1
#[derive(Debug, Clone, Hash)]
pub struct ConstantScoreQuery {
    query: QueryRef,
}


impl ConstantScoreQuery {
    pub fn new(query: QueryRef) -> ConstantScoreQuery {
        ConstantScoreQuery {
            query: query,
        }
    }

    pub fn query(&self) -> &QueryRef {
        &self.query
    }
}


impl PartialEq for ConstantScoreQuery {
    fn eq(&self, other: &ConstantScoreQuery) -> bool {
        *self.query == *other.query
    }
}

impl Eq for ConstantScoreQuery {}


impl Query for ConstantScoreQuery {
    fn rewrite(&self, reader: &dyn IndexReader) -> Result<Option<QueryRef>> {
        match self.query.rewrite(reader)? {
            Some(rewritten) => Ok(Some(Arc::new(ConstantScoreQuery::new(rewritten)))),
            None => Ok(None),
        }
    }

    fn create_weight(&self, searcher: &IndexSearcher, needs_scores: bool) -> Result<Box<dyn Weight>> {
        let inner = self.query.create_weight(searcher, false)?;
        Ok(Box::new(ConstantScoreWeight::new(inner, 1.0, needs_scores)))
    }

    fn to_string_field(&self, field: &str) -> String {
        format!("ConstantScore({})", self.query.to_string_field(field))
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
    use crate::query::Query;
    use crate::query::term_query::TermQuery;
    use crate::query::prefix_query::PrefixQuery;
    use super::ConstantScoreQuery;

    fn make_test_index() -> MemoryIndex {
        let mut index = MemoryIndex::new();
        index.insert_document(Document::new().text("title", "foo foo foo"));
        index.insert_document(Document::new().text("title", "foo bar"));
        index
    }

    #[test]
    fn test_scores_are_constant() {
        let index = make_test_index();
        let searcher = IndexSearcher::new(&index);
        let query = ConstantScoreQuery::new(Arc::new(TermQuery::new("title", Term::from_string("foo"))));

        let weight = query.create_weight(&searcher, true).unwrap();

        assert_eq!(weight.doc_set().len(), 2);
        assert_eq!(weight.score(0), Some(1.0));
        assert_eq!(weight.score(1), Some(1.0));
    }

    #[test]
    fn test_rewrite_unchanged_inner() {
        let index = make_test_index();
        let query = ConstantScoreQuery::new(Arc::new(TermQuery::new("title", Term::from_string("foo"))));

        assert!(query.rewrite(&index).unwrap().is_none());
    }

    #[test]
    fn test_rewrite_rewrites_inner() {
        let index = make_test_index();
        let query = ConstantScoreQuery::new(Arc::new(PrefixQuery::new("title", Term::from_string("fo"))));

        let rewritten = query.rewrite(&index).unwrap().unwrap();

        assert!(rewritten.as_any().is::<ConstantScoreQuery>());
        assert_eq!(rewritten.to_string_field("title"), "ConstantScore(foo)");
    }

    #[test]
    fn test_equality_compares_inner_query() {
        let foo = ConstantScoreQuery::new(Arc::new(TermQuery::new("title", Term::from_string("foo"))));
        let other_foo = ConstantScoreQuery::new(Arc::new(TermQuery::new("title", Term::from_string("foo"))));
        let bar = ConstantScoreQuery::new(Arc::new(TermQuery::new("title", Term::from_string("bar"))));

        assert_eq!(foo, other_foo);
        assert_ne!(foo, bar);
    }
}
