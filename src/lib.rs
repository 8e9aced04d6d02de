#[macro_use]
extern crate log;
extern crate thiserror;
extern crate roaring;
extern crate unicode_segmentation;
#[cfg(test)]
#[macro_use]
extern crate maplit;

pub mod errors;
pub mod term;
pub mod document;
pub mod store;
pub mod similarity;
pub mod query;
pub mod weight;
pub mod collectors;
pub mod searcher;

pub use errors::{QueryError, Result};
pub use term::Term;
pub use query::{Query, QueryRef};
pub use query::clause::{Clause, Occur};
pub use query::clause_limit::ClauseLimit;
pub use query::boolean::{BooleanQuery, BooleanQueryBuilder};
pub use query::term_query::TermQuery;
pub use query::prefix_query::PrefixQuery;
pub use query::match_all::{MatchAllQuery, MatchNoneQuery};
pub use query::constant_score::ConstantScoreQuery;
pub use query::boost::BoostQuery;
pub use weight::Weight;
pub use searcher::IndexSearcher;
