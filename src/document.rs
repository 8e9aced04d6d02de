use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

use crate::term::Term;


/// A document waiting to be inserted into an index
///
/// Text fields are split on Unicode word boundaries and lowercased, keyword
/// fields are indexed as a single term.
#[derive(Debug, Default)]
pub struct Document {
    pub fields: HashMap<String, Vec<Term>>,
}


impl Document {
    pub fn new() -> Document {
        Document {
            fields: HashMap::new(),
        }
    }

    pub fn text(mut self, field: &str, text: &str) -> Document {
        let terms = text.unicode_words().map(|word| Term::from_string(&word.to_lowercase()));

        self.fields.entry(field.to_string()).or_insert_with(Vec::new).extend(terms);
        self
    }

    pub fn keyword(mut self, field: &str, term: Term) -> Document {
        self.fields.entry(field.to_string()).or_insert_with(Vec::new).push(term);
        self
    }
}


#[cfg(test)]
mod tests {
    use crate::term::Term;
    use super::Document;

    fn terms(words: &[&str]) -> Vec<Term> {
        words.iter().map(|word| Term::from_string(word)).collect()
    }

    #[test]
    fn test_text_field_is_tokenised() {
        let doc = Document::new().text("title", "Up from the bowels of Hell");

        assert_eq!(doc.fields, hashmap! {
            "title".to_string() => terms(&["up", "from", "the", "bowels", "of", "hell"]),
        });
    }

    #[test]
    fn test_keyword_field_is_not_tokenised() {
        let doc = Document::new()
            .keyword("kind", Term::from_string("Red Fruit"))
            .keyword("kind", Term::from_string("vehicle"));

        assert_eq!(doc.fields["kind"], terms(&["Red Fruit", "vehicle"]));
    }

    #[test]
    fn test_text_and_keyword_share_a_field() {
        let doc = Document::new()
            .text("title", "Hello world")
            .keyword("title", Term::from_string("Hello world"));

        assert_eq!(doc.fields["title"], terms(&["hello", "world", "Hello world"]));
    }
}
