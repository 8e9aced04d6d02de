use std::cmp;

use roaring::RoaringBitmap;

use crate::errors::Result;
use crate::searcher::IndexSearcher;
use crate::weight::Weight;
use crate::query::Query;
use crate::query::clause::Occur;
use crate::query::boolean::BooleanQuery;


/// Weight of a boolean query
///
/// A document matches if it matches every MUST and FILTER clause, none of the
/// MUST_NOT clauses and at least `minimum_should_match` SHOULD clauses. With
/// no required clauses at least one SHOULD clause has to match.
///
/// The score is the sum of the matching MUST and SHOULD clause scores,
/// multiplied by the coordination factor (the fraction of scoring clauses
/// that matched) unless coord is disabled.
#[derive(Debug)]
pub struct BooleanWeight {
    clauses: Vec<(Occur, Box<dyn Weight>)>,
    minimum_should_match: i32,
    disable_coord: bool,
    max_coord: usize,
    boost: f64,
    needs_scores: bool,
    docs: RoaringBitmap,
}


impl BooleanWeight {
    pub fn new(query: &BooleanQuery, searcher: &IndexSearcher, needs_scores: bool, disable_coord: bool) -> Result<BooleanWeight> {
        let mut clauses = Vec::with_capacity(query.clauses().len());
        for clause in query.iter() {
            let weight = clause.query().create_weight(searcher, needs_scores && clause.is_scoring())?;
            clauses.push((clause.occur(), weight));
        }

        let max_coord = clauses.iter().filter(|&&(occur, _)| occur.is_scoring()).count();
        let docs = matching_docs(&clauses, query.minimum_should_match());

        Ok(BooleanWeight {
            clauses: clauses,
            minimum_should_match: query.minimum_should_match(),
            disable_coord: disable_coord,
            max_coord: max_coord,
            boost: query.boost(),
            needs_scores: needs_scores,
            docs: docs,
        })
    }

    /// Occurrences of the clauses this weight was built from, in order
    pub fn clause_occurs(&self) -> Vec<Occur> {
        self.clauses.iter().map(|&(occur, _)| occur).collect()
    }

    pub fn is_coord_disabled(&self) -> bool {
        self.disable_coord
    }

    pub fn minimum_should_match(&self) -> i32 {
        self.minimum_should_match
    }

    fn coord(&self, overlap: usize) -> f64 {
        if self.disable_coord || self.max_coord == 0 {
            1.0
        } else {
            overlap as f64 / self.max_coord as f64
        }
    }
}


fn matching_docs(clauses: &[(Occur, Box<dyn Weight>)], minimum_should_match: i32) -> RoaringBitmap {
    let mut required: Option<RoaringBitmap> = None;
    let mut optional = Vec::new();
    let mut prohibited = RoaringBitmap::new();

    for &(occur, ref weight) in clauses {
        match occur {
            Occur::Must | Occur::Filter => {
                required = Some(match required {
                    Some(docs) => docs & weight.doc_set(),
                    None => weight.doc_set().clone(),
                });
            }
            Occur::Should => optional.push(weight.doc_set()),
            Occur::MustNot => prohibited |= weight.doc_set(),
        }
    }

    let min_should_match = match required {
        Some(_) => cmp::max(minimum_should_match, 0),
        None => cmp::max(minimum_should_match, 1),
    };
    let min_should_match = min_should_match as usize;

    let mut docs = match required {
        Some(docs) => docs,
        None => {
            let mut docs = RoaringBitmap::new();
            for should_docs in optional.iter() {
                docs |= *should_docs;
            }
            docs
        }
    };

    if min_should_match > 0 {
        docs = docs.iter()
            .filter(|doc_id| {
                optional.iter().filter(|should_docs| should_docs.contains(*doc_id)).count() >= min_should_match
            })
            .collect();
    }

    docs -= &prohibited;
    docs
}


impl Weight for BooleanWeight {
    fn doc_set(&self) -> &RoaringBitmap {
        &self.docs
    }

    fn score(&self, doc_id: u32) -> Option<f64> {
        if !self.docs.contains(doc_id) {
            return None;
        }

        if !self.needs_scores {
            return Some(0.0);
        }

        let mut total_score = 0.0f64;
        let mut overlap = 0;
        for &(occur, ref weight) in self.clauses.iter() {
            if !occur.is_scoring() {
                continue;
            }

            if let Some(score) = weight.score(doc_id) {
                total_score += score;
                overlap += 1;
            }
        }

        Some(total_score * self.coord(overlap) * self.boost)
    }

    fn needs_scores(&self) -> bool {
        self.needs_scores
    }
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::term::Term;
    use crate::document::Document;
    use crate::store::memory::MemoryIndex;
    use crate::searcher::IndexSearcher;
    use crate::similarity::SimilarityModel;
    use crate::weight::Weight;
    use crate::query::{Query, QueryRef};
    use crate::query::clause::Occur;
    use crate::query::boolean::{BooleanQuery, BooleanQueryBuilder};
    use crate::query::term_query::TermQuery;

    fn term(text: &str) -> QueryRef {
        Arc::new(TermQuery::new("title", Term::from_string(text)))
    }

    fn make_test_index() -> MemoryIndex {
        let mut index = MemoryIndex::new();
        index.insert_document(Document::new().text("title", "red apple"));    // 0
        index.insert_document(Document::new().text("title", "green apple"));  // 1
        index.insert_document(Document::new().text("title", "red car"));      // 2
        index.insert_document(Document::new().text("title", "green car"));    // 3
        index.insert_document(Document::new().text("title", "red green"));    // 4
        index
    }

    fn build(minimum_should_match: i32, clauses: Vec<(&str, Occur)>) -> BooleanQuery {
        let mut builder = BooleanQueryBuilder::new();
        builder.set_minimum_should_match(minimum_should_match);
        for (text, occur) in clauses {
            builder.add(term(text), occur).unwrap();
        }
        builder.build()
    }

    fn docs(query: &BooleanQuery) -> Vec<u32> {
        let index = make_test_index();
        let searcher = IndexSearcher::new(&index);

        query.create_weight(&searcher, true).unwrap().doc_set().iter().collect()
    }

    #[test]
    fn test_must() {
        assert_eq!(docs(&build(0, vec![("red", Occur::Must), ("apple", Occur::Must)])), vec![0]);
    }

    #[test]
    fn test_should() {
        assert_eq!(docs(&build(0, vec![("apple", Occur::Should), ("car", Occur::Should)])), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_should_is_optional_alongside_must() {
        assert_eq!(docs(&build(0, vec![("red", Occur::Must), ("apple", Occur::Should)])), vec![0, 2, 4]);
    }

    #[test]
    fn test_minimum_should_match() {
        let query = build(2, vec![("red", Occur::Should), ("green", Occur::Should), ("apple", Occur::Should)]);

        assert_eq!(docs(&query), vec![0, 1, 4]);
    }

    #[test]
    fn test_minimum_should_match_larger_than_should_count_matches_nothing() {
        let query = build(3, vec![("red", Occur::Should), ("green", Occur::Should)]);

        assert_eq!(docs(&query), vec![]);
    }

    #[test]
    fn test_negative_minimum_should_match_behaves_like_zero() {
        let negative = build(-2, vec![("red", Occur::Must), ("apple", Occur::Should)]);
        let zero = build(0, vec![("red", Occur::Must), ("apple", Occur::Should)]);

        assert_eq!(docs(&negative), docs(&zero));
    }

    #[test]
    fn test_filter() {
        assert_eq!(docs(&build(0, vec![("red", Occur::Filter), ("car", Occur::Must)])), vec![2]);
    }

    #[test]
    fn test_must_not() {
        assert_eq!(docs(&build(0, vec![("red", Occur::Must), ("car", Occur::MustNot)])), vec![0, 4]);
    }

    #[test]
    fn test_only_must_not_matches_nothing() {
        assert_eq!(docs(&build(0, vec![("red", Occur::MustNot)])), vec![]);
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        assert_eq!(docs(&build(0, vec![])), vec![]);
    }

    #[test]
    fn test_filter_does_not_score() {
        let index = make_test_index();
        let searcher = IndexSearcher::new(&index);

        let with_filter = build(0, vec![("apple", Occur::Must), ("red", Occur::Filter)]).create_weight(&searcher, true).unwrap();
        let without_filter = build(0, vec![("apple", Occur::Must)]).create_weight(&searcher, true).unwrap();

        assert_eq!(with_filter.score(0), without_filter.score(0));
    }

    #[test]
    fn test_coord() {
        let index = make_test_index();
        let searcher = IndexSearcher::new(&index).with_similarity(SimilarityModel::TfIdf);

        let query = build(0, vec![("red", Occur::Should), ("apple", Occur::Should)]);
        let weight = query.create_weight(&searcher, true).unwrap();
        let red = term("red").create_weight(&searcher, true).unwrap();

        // Doc 2 only matches "red", so only half of the clauses matched
        assert_eq!(weight.score(2), Some(red.score(2).unwrap() * 0.5));
    }

    #[test]
    fn test_disabled_coord() {
        let index = make_test_index();
        let searcher = IndexSearcher::new(&index).with_similarity(SimilarityModel::TfIdf);

        let mut builder = BooleanQueryBuilder::new();
        builder.set_disable_coord(true);
        builder.add(term("red"), Occur::Should).unwrap();
        builder.add(term("apple"), Occur::Should).unwrap();
        let weight = builder.build().create_weight(&searcher, true).unwrap();
        let red = term("red").create_weight(&searcher, true).unwrap();

        assert_eq!(weight.score(2), red.score(2));
    }

    #[test]
    fn test_weight_without_scores_uses_filter_clauses() {
        let index = make_test_index();
        let searcher = IndexSearcher::new(&index);

        let mut builder = BooleanQueryBuilder::new();
        builder.set_disable_coord(true);
        builder.add(term("red"), Occur::Must).unwrap();
        builder.add(term("apple"), Occur::Should).unwrap();
        builder.add(term("car"), Occur::MustNot).unwrap();
        let query = builder.build();

        let weight = query.boolean_weight(&searcher, false).unwrap();

        assert_eq!(weight.clause_occurs(), vec![Occur::Filter, Occur::Should, Occur::MustNot]);
        assert!(weight.is_coord_disabled());
        assert!(!weight.needs_scores());
        assert_eq!(weight.score(0), Some(0.0));
        assert_eq!(weight.doc_set().iter().collect::<Vec<_>>(), vec![0, 4]);

        // The query itself keeps its MUST clause
        assert_eq!(query.clauses()[0].occur(), Occur::Must);
    }

    #[test]
    fn test_weight_with_scores_keeps_must_clauses() {
        let index = make_test_index();
        let searcher = IndexSearcher::new(&index);

        let query = build(1, vec![("red", Occur::Must), ("apple", Occur::Should)]);
        let weight = query.boolean_weight(&searcher, true).unwrap();

        assert_eq!(weight.clause_occurs(), vec![Occur::Must, Occur::Should]);
        assert_eq!(weight.minimum_should_match(), 1);
        assert_eq!(weight.doc_set().iter().collect::<Vec<_>>(), vec![0]);
    }
}
