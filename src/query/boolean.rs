//! Boolean queries
//!
//! A `BooleanQuery` combines sub-queries, each tagged with an `Occur`. Queries
//! are normally assembled with `BooleanQueryBuilder` and are immutable once
//! built. Their equality ignores clause order: MUST and SHOULD clauses are
//! compared as multisets (a query required twice is stricter than once) while
//! FILTER and MUST_NOT clauses are compared as sets.
//!
//! `BooleanQuery::new_legacy` creates the older, incrementally mutable kind.
//! Legacy queries compare by their literal clause sequence and are never
//! equal to a built query.

use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::slice;
use std::sync::{Arc, OnceLock};

use crate::errors::{QueryError, Result};
use crate::store::IndexReader;
use crate::searcher::IndexSearcher;
use crate::weight::Weight;
use crate::weight::boolean::BooleanWeight;
use crate::query::{Query, QueryRef, downcast_eq, hash_with_type, hash_boost, boost_suffix};
use crate::query::clause::{Clause, Occur};
use crate::query::clause_limit::ClauseLimit;
use crate::query::clause_sets::{Multiset, UniqueSet};
use crate::query::boost::BoostQuery;
use crate::query::constant_score::ConstantScoreQuery;


/// Order-independent views of the clauses, used only for equality and hashing
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
struct ClauseViews {
    must: Multiset<QueryRef>,
    should: Multiset<QueryRef>,
    filter: UniqueSet<QueryRef>,
    must_not: UniqueSet<QueryRef>,
}


impl ClauseViews {
    fn from_clauses(clauses: &[Clause]) -> ClauseViews {
        let mut views = ClauseViews::default();

        for clause in clauses {
            let query = clause.query().clone();

            match clause.occur() {
                Occur::Must => views.must.insert(query),
                Occur::Should => views.should.insert(query),
                Occur::Filter => {
                    views.filter.insert(query);
                }
                Occur::MustNot => {
                    views.must_not.insert(query);
                }
            }
        }

        views
    }
}


#[derive(Debug, Clone)]
enum Kind {
    Immutable {
        views: ClauseViews,
        hash_code: OnceLock<u64>,
    },
    Legacy,
}


#[derive(Debug, Clone)]
pub struct BooleanQuery {
    clauses: Vec<Clause>,
    minimum_should_match: i32,
    disable_coord: bool,
    boost: f64,
    kind: Kind,
}


impl BooleanQuery {
    fn new_immutable(disable_coord: bool, minimum_should_match: i32, clauses: Vec<Clause>) -> BooleanQuery {
        let views = ClauseViews::from_clauses(&clauses);

        BooleanQuery {
            clauses: clauses,
            minimum_should_match: minimum_should_match,
            disable_coord: disable_coord,
            boost: 1.0,
            kind: Kind::Immutable {
                views: views,
                hash_code: OnceLock::new(),
            },
        }
    }

    /// Creates an empty query that can be modified with `add` and
    /// `set_minimum_should_match`
    ///
    /// New code should use `BooleanQueryBuilder` instead.
    pub fn new_legacy(disable_coord: bool) -> BooleanQuery {
        BooleanQuery {
            clauses: Vec::new(),
            minimum_should_match: 0,
            disable_coord: disable_coord,
            boost: 1.0,
            kind: Kind::Legacy,
        }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn iter(&self) -> slice::Iter<Clause> {
        self.clauses.iter()
    }

    pub fn is_coord_disabled(&self) -> bool {
        self.disable_coord
    }

    pub fn minimum_should_match(&self) -> i32 {
        self.minimum_should_match
    }

    pub fn is_legacy(&self) -> bool {
        match self.kind {
            Kind::Legacy => true,
            Kind::Immutable{..} => false,
        }
    }

    /// Returns a copy of this query with a different boost
    pub fn with_boost(&self, boost: f64) -> BooleanQuery {
        let mut query = self.clone();
        query.boost = boost;
        query
    }

    fn ensure_mutable(&self, method: &'static str) -> Result<()> {
        match self.kind {
            Kind::Legacy => Ok(()),
            Kind::Immutable{..} => Err(QueryError::IllegalMutation { method: method }),
        }
    }

    /// Adds a clause to a legacy query
    pub fn add(&mut self, query: QueryRef, occur: Occur) -> Result<()> {
        self.add_clause(Clause::new(query, occur))
    }

    /// Adds a clause to a legacy query
    ///
    /// Fails with `IllegalMutation` on a built query, and with `TooManyClauses`
    /// if the query already holds as many clauses as the global limit allows.
    pub fn add_clause(&mut self, clause: Clause) -> Result<()> {
        self.ensure_mutable("add")?;

        let limit = ClauseLimit::global().get();
        if self.clauses.len() as i64 >= limit as i64 {
            warn!("rejected clause, maxClauseCount is set to {}", limit);
            return Err(QueryError::TooManyClauses { limit: limit });
        }

        self.clauses.push(clause);
        Ok(())
    }

    /// Sets the minimum number of SHOULD clauses that must match on a legacy query
    pub fn set_minimum_should_match(&mut self, minimum_should_match: i32) -> Result<()> {
        self.ensure_mutable("setMinimumNumberShouldMatch")?;
        self.minimum_should_match = minimum_should_match;
        Ok(())
    }

    /// Reinterprets every MUST clause as FILTER
    ///
    /// Used when scores are not needed, MUST and FILTER then match the same
    /// documents. The coord flag only affects scoring and is dropped.
    pub fn rewrite_no_scoring(&self) -> BooleanQuery {
        let clauses = self.clauses.iter()
            .map(|clause| {
                match clause.occur() {
                    Occur::Must => Clause::new(clause.query().clone(), Occur::Filter),
                    _ => clause.clone(),
                }
            })
            .collect();

        BooleanQuery::new_immutable(false, self.minimum_should_match, clauses)
    }

    /// Builds the weight for this query, applying the no-scoring transform
    /// first if scores aren't needed
    pub fn boolean_weight(&self, searcher: &IndexSearcher, needs_scores: bool) -> Result<BooleanWeight> {
        debug!("creating weight for {} (needs_scores: {})", self.to_string_field(""), needs_scores);

        if needs_scores {
            BooleanWeight::new(self, searcher, needs_scores, self.disable_coord)
        } else {
            let query = self.rewrite_no_scoring();
            BooleanWeight::new(&query, searcher, needs_scores, self.disable_coord)
        }
    }

    fn compute_hash_code(&self, views: &ClauseViews) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.disable_coord.hash(&mut hasher);
        self.minimum_should_match.hash(&mut hasher);
        views.hash(&mut hasher);
        hasher.finish()
    }
}


impl fmt::Display for BooleanQuery {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string_field(""))
    }
}


impl<'a> IntoIterator for &'a BooleanQuery {
    type Item = &'a Clause;
    type IntoIter = slice::Iter<'a, Clause>;

    fn into_iter(self) -> slice::Iter<'a, Clause> {
        self.clauses.iter()
    }
}


impl PartialEq for BooleanQuery {
    fn eq(&self, other: &BooleanQuery) -> bool {
        if self.boost != other.boost
            || self.minimum_should_match != other.minimum_should_match
            || self.disable_coord != other.disable_coord
        {
            return false;
        }

        match (&self.kind, &other.kind) {
            (&Kind::Immutable{views: ref a, ..}, &Kind::Immutable{views: ref b, ..}) => a == b,
            (&Kind::Legacy, &Kind::Legacy) => self.clauses == other.clauses,
            _ => false,
        }
    }
}

impl Eq for BooleanQuery {}


impl Hash for BooleanQuery {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_boost(self.boost, state);

        match self.kind {
            Kind::Immutable{ref views, ref hash_code} => {
                let hash_code = *hash_code.get_or_init(|| self.compute_hash_code(views));
                hash_code.hash(state);
            }
            Kind::Legacy => {
                self.disable_coord.hash(state);
                self.minimum_should_match.hash(state);
                self.clauses.hash(state);
            }
        }
    }
}


impl Query for BooleanQuery {
    fn rewrite(&self, reader: &dyn IndexReader) -> Result<Option<QueryRef>> {
        if self.boost != 1.0 {
            // Boosted queries are wrapped rather than simplified
            let unboosted: QueryRef = Arc::new(self.with_boost(1.0));
            return Ok(Some(Arc::new(BoostQuery::new(unboosted, self.boost))));
        }

        if self.minimum_should_match == 0 && self.clauses.len() == 1 {
            let clause = &self.clauses[0];

            // A lone MUST_NOT clause matches nothing and stays a boolean query
            if !clause.is_prohibited() {
                let mut query = clause.query().clone();

                if !clause.is_scoring() {
                    // The clause is a filter, so the collapsed query must not score
                    query = Arc::new(BoostQuery::new(Arc::new(ConstantScoreQuery::new(query)), 0.0));
                }

                return Ok(Some(query));
            }
        }

        let mut actually_rewritten = false;
        let mut rewritten_clauses = Vec::with_capacity(self.clauses.len());
        for clause in self.clauses.iter() {
            let query = match clause.query().rewrite(reader)? {
                Some(rewritten) => {
                    if !Arc::ptr_eq(&rewritten, clause.query()) {
                        actually_rewritten = true;
                    }

                    rewritten
                }
                None => clause.query().clone(),
            };

            rewritten_clauses.push(Clause::new(query, clause.occur()));
        }

        if !actually_rewritten {
            return Ok(None);
        }

        let mut builder = BooleanQueryBuilder::with_clause_limit(reader.clause_limit());
        builder.set_disable_coord(self.disable_coord);
        builder.set_minimum_should_match(self.minimum_should_match);
        for clause in rewritten_clauses {
            builder.add_clause(clause)?;
        }

        Ok(Some(Arc::new(builder.build())))
    }

    fn create_weight(&self, searcher: &IndexSearcher, needs_scores: bool) -> Result<Box<dyn Weight>> {
        Ok(Box::new(self.boolean_weight(searcher, needs_scores)?))
    }

    fn to_string_field(&self, field: &str) -> String {
        let mut buffer = String::new();

        let need_parens = self.boost != 1.0 || self.minimum_should_match > 0;
        if need_parens {
            buffer.push('(');
        }

        let clauses = self.clauses.iter()
            .map(|clause| {
                let sub_query = clause.query();

                if sub_query.as_any().is::<BooleanQuery>() {
                    format!("{}({})", clause.occur(), sub_query.to_string_field(field))
                } else {
                    format!("{}{}", clause.occur(), sub_query.to_string_field(field))
                }
            })
            .collect::<Vec<_>>();
        buffer.push_str(&clauses.join(" "));

        if need_parens {
            buffer.push(')');
        }

        if self.minimum_should_match > 0 {
            buffer.push('~');
            buffer.push_str(&self.minimum_should_match.to_string());
        }

        buffer.push_str(&boost_suffix(self.boost));
        buffer
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


/// Accumulates clauses and builds an immutable `BooleanQuery`
///
/// Every added clause is checked against a `ClauseLimit`, the global one
/// unless another is given with `with_clause_limit`. The builder can be
/// reused after `build`.
#[derive(Debug)]
pub struct BooleanQueryBuilder<'a> {
    clause_limit: &'a ClauseLimit,
    disable_coord: bool,
    minimum_should_match: i32,
    clauses: Vec<Clause>,
}


impl BooleanQueryBuilder<'static> {
    pub fn new() -> BooleanQueryBuilder<'static> {
        BooleanQueryBuilder::with_clause_limit(ClauseLimit::global())
    }
}


impl Default for BooleanQueryBuilder<'static> {
    fn default() -> BooleanQueryBuilder<'static> {
        BooleanQueryBuilder::new()
    }
}


impl<'a> BooleanQueryBuilder<'a> {
    pub fn with_clause_limit(clause_limit: &'a ClauseLimit) -> BooleanQueryBuilder<'a> {
        BooleanQueryBuilder {
            clause_limit: clause_limit,
            disable_coord: false,
            minimum_should_match: 0,
            clauses: Vec::new(),
        }
    }

    /// Disables the coordination factor when scoring
    ///
    /// The factor rarely makes sense for automatically generated queries, such
    /// as the expansion of a prefix query.
    pub fn set_disable_coord(&mut self, disable_coord: bool) -> &mut BooleanQueryBuilder<'a> {
        self.disable_coord = disable_coord;
        self
    }

    /// Sets how many SHOULD clauses must match for the query to match
    ///
    /// This is not checked against the number of SHOULD clauses. A value
    /// larger than that makes the query unsatisfiable.
    pub fn set_minimum_should_match(&mut self, minimum_should_match: i32) -> &mut BooleanQueryBuilder<'a> {
        self.minimum_should_match = minimum_should_match;
        self
    }

    pub fn add(&mut self, query: QueryRef, occur: Occur) -> Result<&mut BooleanQueryBuilder<'a>> {
        self.add_clause(Clause::new(query, occur))
    }

    pub fn add_clause(&mut self, clause: Clause) -> Result<&mut BooleanQueryBuilder<'a>> {
        let limit = self.clause_limit.get();
        if self.clauses.len() as i64 >= limit as i64 {
            warn!("rejected clause, maxClauseCount is set to {}", limit);
            return Err(QueryError::TooManyClauses { limit: limit });
        }

        trace!("adding clause {}{}", clause.occur(), clause.query());
        self.clauses.push(clause);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn build(&self) -> BooleanQuery {
        BooleanQuery::new_immutable(self.disable_coord, self.minimum_should_match, self.clauses.clone())
    }
}
