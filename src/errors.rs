//! Errors raised while building, mutating or rewriting queries

use thiserror::Error;


#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A clause-adding operation would exceed the configured clause limit.
    ///
    /// This usually happens when a multi-term query (such as a prefix query)
    /// expands into more terms than the limit allows.
    #[error("maxClauseCount is set to {limit}")]
    TooManyClauses { limit: i32 },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A mutation method was called on a query built with `BooleanQueryBuilder`
    #[error("this BooleanQuery has been created with BooleanQueryBuilder and must not be modified afterwards, \
             the {method} method only exists for backward compatibility")]
    IllegalMutation { method: &'static str },
}


pub type Result<T> = ::std::result::Result<T, QueryError>;
