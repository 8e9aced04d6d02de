use std::fmt;


/// A single indexed value, compared and ordered byte by byte
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub struct Term(Vec<u8>);


impl Term {
    pub fn from_string(string: &str) -> Term {
        Term(string.as_bytes().to_vec())
    }

    pub fn starts_with(&self, prefix: &Term) -> bool {
        self.0.starts_with(&prefix.0)
    }
}


impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}


#[cfg(test)]
mod tests {
    use super::Term;

    #[test]
    fn test_hiragana_string_round_trips_through_display() {
        let term = Term::from_string("こんにちは");

        assert_eq!(term.to_string(), "こんにちは");
    }

    #[test]
    fn test_terms_order_bytewise() {
        let mut terms = vec![Term::from_string("help"), Term::from_string("hel"), Term::from_string("Help")];
        terms.sort();

        assert_eq!(terms, vec![Term::from_string("Help"), Term::from_string("hel"), Term::from_string("help")]);
    }

    #[test]
    fn test_starts_with() {
        let term = Term::from_string("hello");

        assert!(term.starts_with(&Term::from_string("hel")));
        assert!(term.starts_with(&Term::from_string("hello")));
        assert!(term.starts_with(&Term::from_string("")));
        assert!(!term.starts_with(&Term::from_string("help")));
        assert!(!term.starts_with(&Term::from_string("hello!")));
    }
}
