use std::any::Any;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::errors::Result;
use crate::term::Term;
use crate::store::IndexReader;
use crate::searcher::IndexSearcher;
use crate::weight::Weight;
use crate::query::{Query, QueryRef, downcast_eq, hash_with_type, hash_boost, boost_suffix};
use crate::query::clause::Occur;
use crate::query::boolean::BooleanQueryBuilder;
use crate::query::term_query::TermQuery;
use crate::query::match_all::MatchNoneQuery;


/// Matches documents containing any term in a field that starts with a prefix
///
/// Rewriting expands the prefix into a boolean query with one SHOULD clause
/// per matching term. The expansion is bound by the snapshot's clause limit.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixQuery {
    field: String,
    prefix: Term,
    boost: f64,
}


impl PrefixQuery {
    pub fn new(field: &str, prefix: Term) -> PrefixQuery {
        PrefixQuery {
            field: field.to_string(),
            prefix: prefix,
            boost: 1.0,
        }
    }

    pub fn with_boost(mut self, boost: f64) -> PrefixQuery {
        self.boost = boost;
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn prefix(&self) -> &Term {
        &self.prefix
    }

    fn expand(&self, reader: &dyn IndexReader) -> Result<QueryRef> {
        let terms = reader.terms(&self.field)
            .into_iter()
            .filter(|term| term.starts_with(&self.prefix))
            .collect::<Vec<_>>();

        if terms.is_empty() {
            return Ok(Arc::new(MatchNoneQuery::new()));
        }

        let mut builder = BooleanQueryBuilder::with_clause_limit(reader.clause_limit());
        builder.set_disable_coord(true);

        for term in terms {
            if let Err(err) = builder.add(Arc::new(TermQuery::new(&self.field, term)), Occur::Should) {
                warn!("prefix {} expands to too many terms", self.to_string_field(""));
                return Err(err);
            }
        }

        debug!("expanded prefix {} into {} terms", self.to_string_field(""), builder.len());
        Ok(Arc::new(builder.build().with_boost(self.boost)))
    }
}


impl Eq for PrefixQuery {}

impl Hash for PrefixQuery {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field.hash(state);
        self.prefix.hash(state);
        hash_boost(self.boost, state);
    }
}


impl Query for PrefixQuery {
    fn rewrite(&self, reader: &dyn IndexReader) -> Result<Option<QueryRef>> {
        Ok(Some(self.expand(reader)?))
    }

    fn create_weight(&self, searcher: &IndexSearcher, needs_scores: bool) -> Result<Box<dyn Weight>> {
        let expanded = searcher.rewrite(self.expand(searcher.reader())?)?;
        expanded.create_weight(searcher, needs_scores)
    }

    fn to_string_field(&self, field: &str) -> String {
        if self.field == field {
            format!("{}*{}", self.prefix, boost_suffix(self.boost))
        } else {
            format!("{}:{}*{}", self.field, self.prefix, boost_suffix(self.boost))
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
