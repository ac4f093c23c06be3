//! Tokenization and word normalization
//!
//! An accepted title becomes an ordered list of normalized words: split on
//! Unicode word boundaries, keep only fully-alphabetic tokens, lowercase, then
//! reduce plurals to singular form. Dropped tokens close up, they do not leave
//! gaps: "2 Fast Ideas" yields the pair (fast, idea) even though a number sat
//! between nothing and "Fast" in the original. That matches the behavior the
//! counts have always had, so downstream consumers rely on it.
use unicode_segmentation::UnicodeSegmentation;
use inflector::string::singularize::to_singular;

/// Split a string into word-like units.
pub trait Tokenizer {
    /// The split must be deterministic for a given input; beyond that, where
    /// word boundaries fall is this capability's own business.
    fn words<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// UAX-29 word boundaries, same as the rest of our text tooling
pub struct UnicodeWords;

impl Tokenizer for UnicodeWords {
    fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.unicode_words().collect()
    }
}

/// Reduce a word to its singular form.
pub trait Singularize {
    /// Words with no plural/singular distinction pass through unchanged.
    fn singular(&self, word: &str) -> String;
}

/// Rails-style morphological rules from the Inflector crate
pub struct Inflect;

impl Singularize for Inflect {
    fn singular(&self, word: &str) -> String {
        to_singular(word)
    }
}

/// The full normalization stage: tokenize, filter, lowercase, singularize.
pub struct Normalizer<T: Tokenizer, S: Singularize> {
    tokenizer: T,
    singularizer: S,
}

impl Normalizer<UnicodeWords, Inflect> {
    pub fn new() -> Self {
        Normalizer::with(UnicodeWords, Inflect)
    }
}

impl<T: Tokenizer, S: Singularize> Normalizer<T, S> {
    pub fn with(tokenizer: T, singularizer: S) -> Self {
        Normalizer { tokenizer: tokenizer, singularizer: singularizer }
    }

    /// Normalize one title into its surviving word sequence, in order.
    pub fn normalize(&self, title: &str) -> Vec<String> {
        self.tokenizer.words(title)
            .into_iter()
            .filter(|word| word.chars().all(|c| c.is_alphabetic()))
            .map(|word| self.singularizer.singular(&word.to_lowercase()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_singularize() {
        let norm = Normalizer::new();
        assert_eq!(norm.normalize("The Cats Ran"), vec!["the", "cat", "ran"]);
    }

    #[test]
    fn test_non_alphabetic_tokens_are_dropped() {
        let norm = Normalizer::new();
        // "2", "3.5" and "don't" all contain non-alphabetic characters and
        // must vanish outright rather than being normalized.
        assert_eq!(norm.normalize("2 Fast Ideas don't scale 3.5 times"),
                   vec!["fast", "idea", "scale", "time"]);
    }

    #[test]
    fn test_dropped_tokens_close_up() {
        let norm = Normalizer::new();
        // "100" separated the words originally; the survivors are adjacent now.
        assert_eq!(norm.normalize("top 100 libraries"), vec!["top", "library"]);
    }

    #[test]
    fn test_empty_and_symbol_only_titles() {
        let norm = Normalizer::new();
        assert!(norm.normalize("").is_empty());
        assert!(norm.normalize("-- 123 !!").is_empty());
    }

    #[test]
    fn test_singularization_is_idempotent() {
        let inf = Inflect;
        for word in &["cats", "dogs", "library", "ran", "network"] {
            let once = inf.singular(word);
            assert_eq!(inf.singular(&once), once);
        }
    }

    #[test]
    fn test_determinism() {
        let norm = Normalizer::new();
        let title = "Why Databases Love B-Trees";
        assert_eq!(norm.normalize(title), norm.normalize(title));
    }
}
