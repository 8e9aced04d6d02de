//! Queries
//!
//! Every query kind implements the `Query` trait and is shared as a
//! `QueryRef` (`Arc<dyn Query>`). Composite queries hold their children as
//! `QueryRef`s and never need to know their concrete types.
//!
//! Rewriting returns `Ok(None)` when a query has nothing to simplify. The
//! caller keeps its existing `Arc`, so a driver can detect a fixed point by
//! identity rather than by comparing structures.

pub mod clause;
pub mod clause_limit;
pub mod clause_sets;
pub mod boolean;
pub mod term_query;
pub mod prefix_query;
pub mod match_all;
pub mod constant_score;
pub mod boost;

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::errors::Result;
use crate::store::IndexReader;
use crate::searcher::IndexSearcher;
use crate::weight::Weight;


pub type QueryRef = Arc<dyn Query>;


pub trait Query: fmt::Debug + Send + Sync + Any {
    /// Simplifies this query against an index snapshot
    ///
    /// Returns `None` if the query is already as simple as it can be.
    fn rewrite(&self, _reader: &dyn IndexReader) -> Result<Option<QueryRef>> {
        Ok(None)
    }

    fn create_weight(&self, searcher: &IndexSearcher, needs_scores: bool) -> Result<Box<dyn Weight>>;

    /// Renders the query, omitting the field name wherever it equals `field`
    fn to_string_field(&self, field: &str) -> String;

    fn boost(&self) -> f64 {
        1.0
    }

    fn eq_query(&self, other: &dyn Query) -> bool;
    fn hash_query(&self, state: &mut dyn Hasher);
    fn as_any(&self) -> &dyn Any;
}


impl PartialEq for dyn Query {
    fn eq(&self, other: &dyn Query) -> bool {
        self.eq_query(other)
    }
}

impl Eq for dyn Query {}

impl Hash for dyn Query {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_query(state)
    }
}

impl fmt::Display for dyn Query {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string_field(""))
    }
}


/// Structural equality between a concrete query and any other query
pub(crate) fn downcast_eq<Q: Query + PartialEq>(query: &Q, other: &dyn Query) -> bool {
    match other.as_any().downcast_ref::<Q>() {
        Some(other) => query == other,
        None => false,
    }
}


/// Hashes a concrete query, mixing in its type so that different query
/// kinds with similar contents don't collide
pub(crate) fn hash_with_type<Q: Query + Hash>(query: &Q, mut state: &mut dyn Hasher) {
    TypeId::of::<Q>().hash(&mut state);
    query.hash(&mut state);
}


/// Hashes a boost so that `0.0` and `-0.0`, which compare equal, hash equal
pub(crate) fn hash_boost<H: Hasher>(boost: f64, state: &mut H) {
    let boost = if boost == 0.0 { 0.0f64 } else { boost };
    boost.to_bits().hash(state);
}


/// The `^boost` suffix appended to rendered queries
pub(crate) fn boost_suffix(boost: f64) -> String {
    if boost != 1.0 {
        format!("^{:?}", boost)
    } else {
        String::new()
    }
}
