use std::fmt;

use crate::query::QueryRef;


/// The role a clause plays within a boolean query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occur {
    /// Must match, contributes to the score
    Must,

    /// May match, contributes to the score when it does
    Should,

    /// Must match, does not contribute to the score
    Filter,

    /// Must not match
    MustNot,
}


impl Occur {
    pub fn is_scoring(&self) -> bool {
        match *self {
            Occur::Must | Occur::Should => true,
            Occur::Filter | Occur::MustNot => false,
        }
    }

    pub fn is_required(&self) -> bool {
        match *self {
            Occur::Must | Occur::Filter => true,
            Occur::Should | Occur::MustNot => false,
        }
    }

    pub fn is_prohibited(&self) -> bool {
        *self == Occur::MustNot
    }
}


impl fmt::Display for Occur {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let marker = match *self {
            Occur::Must => "+",
            Occur::Should => "",
            Occur::Filter => "#",
            Occur::MustNot => "-",
        };

        write!(f, "{}", marker)
    }
}


#[derive(Debug, Clone, Hash)]
pub struct Clause {
    query: QueryRef,
    occur: Occur,
}


impl PartialEq for Clause {
    fn eq(&self, other: &Clause) -> bool {
        self.occur == other.occur && *self.query == *other.query
    }
}

impl Eq for Clause {}


impl Clause {
    pub fn new(query: QueryRef, occur: Occur) -> Clause {
        Clause {
            query: query,
            occur: occur,
        }
    }

    pub fn query(&self) -> &QueryRef {
        &self.query
    }

    pub fn occur(&self) -> Occur {
        self.occur
    }

    pub fn is_scoring(&self) -> bool {
        self.occur.is_scoring()
    }

    pub fn is_required(&self) -> bool {
        self.occur.is_required()
    }

    pub fn is_prohibited(&self) -> bool {
        self.occur.is_prohibited()
    }
}
