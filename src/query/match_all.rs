use std::any::Any;
use std::hash::{Hash, Hasher};

use crate::errors::Result;
use crate::searcher::IndexSearcher;
use crate::weight::{Weight, MatchAllWeight, MatchNoneWeight};
use crate::query::{Query, downcast_eq, hash_with_type, hash_boost, boost_suffix};


#[derive(Debug, Clone, PartialEq)]
pub struct MatchAllQuery {
    boost: f64,
}


impl MatchAllQuery {
    pub fn new() -> MatchAllQuery {
        MatchAllQuery {
            boost: 1.0,
        }
    }

    pub fn with_boost(mut self, boost: f64) -> MatchAllQuery {
        self.boost = boost;
        self
    }
}


impl Default for MatchAllQuery {
    fn default() -> MatchAllQuery {
        MatchAllQuery::new()
    }
}


impl Eq for MatchAllQuery {}

impl Hash for MatchAllQuery {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_boost(self.boost, state);
    }
}


impl Query for MatchAllQuery {
    fn create_weight(&self, searcher: &IndexSearcher, needs_scores: bool) -> Result<Box<dyn Weight>> {
        Ok(Box::new(MatchAllWeight::new(searcher, self.boost, needs_scores)))
    }

    fn to_string_field(&self, _field: &str) -> String {
        format!("*:*{}", boost_suffix(self.boost))
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


#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MatchNoneQuery;


impl MatchNoneQuery {
    pub fn new() -> MatchNoneQuery {
        MatchNoneQuery
    }
}


impl Query for MatchNoneQuery {
    fn create_weight(&self, _searcher: &IndexSearcher, needs_scores: bool) -> Result<Box<dyn Weight>> {
        Ok(Box::new(MatchNoneWeight::new(needs_scores)))
    }

    fn to_string_field(&self, _field: &str) -> String {
        "MatchNoDocs".to_string()
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
    use crate::document::Document;
    use crate::store::memory::MemoryIndex;
    use crate::searcher::IndexSearcher;
    use crate::query::Query;
    use super::{MatchAllQuery, MatchNoneQuery};

    #[test]
    fn test_match_all() {
        let mut index = MemoryIndex::new();
        index.insert_document(Document::new().text("title", "a"));
        index.insert_document(Document::new().text("title", "b"));
        let searcher = IndexSearcher::new(&index);

        let weight = MatchAllQuery::new().with_boost(2.0).create_weight(&searcher, true).unwrap();

        assert_eq!(weight.doc_set().len(), 2);
        assert_eq!(weight.score(1), Some(2.0));
    }

    #[test]
    fn test_match_none() {
        let mut index = MemoryIndex::new();
        index.insert_document(Document::new().text("title", "a"));
        let searcher = IndexSearcher::new(&index);

        let weight = MatchNoneQuery::new().create_weight(&searcher, true).unwrap();

        assert!(weight.doc_set().is_empty());
        assert_eq!(weight.score(0), None);
    }

    #[test]
    fn test_to_string() {
        assert_eq!(MatchAllQuery::new().to_string_field(""), "*:*");
        assert_eq!(MatchAllQuery::new().with_boost(2.0).to_string_field(""), "*:*^2.0");
        assert_eq!(MatchNoneQuery::new().to_string_field(""), "MatchNoDocs");
    }
}
