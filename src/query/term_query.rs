use std::any::Any;
use std::hash::{Hash, Hasher};

use crate::errors::Result;
use crate::term::Term;
use crate::searcher::IndexSearcher;
use crate::weight::Weight;
use crate::weight::term::TermWeight;
use crate::query::{Query, downcast_eq, hash_with_type, hash_boost, boost_suffix};


/// Matches documents containing a term in a field
#[derive(Debug, Clone, PartialEq)]
pub struct TermQuery {
    field: String,
    term: Term,
    boost: f64,
}


impl TermQuery {
    pub fn new(field: &str, term: Term) -> TermQuery {
        TermQuery {
            field: field.to_string(),
            term: term,
            boost: 1.0,
        }
    }

    pub fn with_boost(mut self, boost: f64) -> TermQuery {
        self.boost = boost;
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn term(&self) -> &Term {
        &self.term
    }
}


impl Eq for TermQuery {}

impl Hash for TermQuery {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field.hash(state);
        self.term.hash(state);
        hash_boost(self.boost, state);
    }
}


impl Query for TermQuery {
    fn create_weight(&self, searcher: &IndexSearcher, needs_scores: bool) -> Result<Box<dyn Weight>> {
        Ok(Box::new(TermWeight::new(searcher, &self.field, &self.term, self.boost, needs_scores)))
    }

    fn to_string_field(&self, field: &str) -> String {
        if self.field == field {
            format!("{}{}", self.term, boost_suffix(self.boost))
        } else {
            format!("{}:{}{}", self.field, self.term, boost_suffix(self.boost))
        }
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
