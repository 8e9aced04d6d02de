use std::sync::atomic::{AtomicI32, Ordering};

use crate::errors::{QueryError, Result};


pub const DEFAULT_MAX_CLAUSE_COUNT: i32 = 1024;

static GLOBAL_CLAUSE_LIMIT: ClauseLimit = ClauseLimit::with_value(DEFAULT_MAX_CLAUSE_COUNT);


/// The maximum number of clauses a single boolean query may hold
///
/// This bounds the fan-out of automatically expanded queries (such as
/// prefix queries matching thousands of terms). Exceeding it fails the
/// construction call with `QueryError::TooManyClauses`.
///
/// There is one process-wide limit, returned by `ClauseLimit::global()`.
/// Builders and index snapshots may also be handed their own instance.
/// Reads racing with a write may see either value.
#[derive(Debug)]
pub struct ClauseLimit {
    max_clause_count: AtomicI32,
}


impl ClauseLimit {
    const fn with_value(max_clause_count: i32) -> ClauseLimit {
        ClauseLimit {
            max_clause_count: AtomicI32::new(max_clause_count),
        }
    }

    pub fn new(max_clause_count: i32) -> Result<ClauseLimit> {
        check_max_clause_count(max_clause_count)?;
        Ok(ClauseLimit::with_value(max_clause_count))
    }

    pub fn global() -> &'static ClauseLimit {
        &GLOBAL_CLAUSE_LIMIT
    }

    pub fn get(&self) -> i32 {
        self.max_clause_count.load(Ordering::Relaxed)
    }

    /// Changes the limit. Values below 1 are rejected and leave the limit
    /// unchanged.
    pub fn set(&self, max_clause_count: i32) -> Result<()> {
        check_max_clause_count(max_clause_count)?;
        self.max_clause_count.store(max_clause_count, Ordering::Relaxed);
        debug!("maxClauseCount set to {}", max_clause_count);
        Ok(())
    }
}


impl Default for ClauseLimit {
    fn default() -> ClauseLimit {
        ClauseLimit::with_value(DEFAULT_MAX_CLAUSE_COUNT)
    }
}


fn check_max_clause_count(max_clause_count: i32) -> Result<()> {
    if max_clause_count < 1 {
        return Err(QueryError::InvalidConfiguration("maxClauseCount must be >= 1".to_string()));
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use crate::errors::QueryError;
    use super::{ClauseLimit, DEFAULT_MAX_CLAUSE_COUNT};

    #[test]
    fn test_default() {
        assert_eq!(ClauseLimit::default().get(), 1024);
        assert_eq!(DEFAULT_MAX_CLAUSE_COUNT, 1024);
    }

    #[test]
    fn test_set() {
        let limit = ClauseLimit::default();
        limit.set(10).unwrap();

        assert_eq!(limit.get(), 10);
    }

    #[test]
    fn test_set_rejects_values_below_one() {
        let limit = ClauseLimit::new(7).unwrap();

        assert_eq!(limit.set(0), Err(QueryError::InvalidConfiguration("maxClauseCount must be >= 1".to_string())));
        assert!(limit.set(-5).is_err());
        assert_eq!(limit.get(), 7);
    }

    #[test]
    fn test_new_rejects_values_below_one() {
        assert!(ClauseLimit::new(0).is_err());
        assert!(ClauseLimit::new(1).is_ok());
    }

    #[test]
    fn test_one_is_accepted() {
        let limit = ClauseLimit::default();

        assert!(limit.set(1).is_ok());
        assert_eq!(limit.get(), 1);
    }
}
